//! Holds the most recent JSON document uploaded for testing

use crate::domain::models::UploadedJson;
use crate::error::{AppError, Result};
use tokio::sync::RwLock;

const UTF8_BOM: char = '\u{feff}';

#[derive(Default)]
pub struct UploadStore {
    current: RwLock<Option<UploadedJson>>,
}

impl UploadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store an upload, replacing any previous one.
    ///
    /// The body must be UTF-8 and parse as a JSON value; no schema is applied
    /// and the original text is kept byte-for-byte. A leading byte-order mark
    /// is ignored for validation but kept in the stored text.
    pub async fn put(&self, file_name: Option<String>, bytes: &[u8]) -> Result<UploadedJson> {
        let raw = std::str::from_utf8(bytes)
            .map_err(|e| AppError::InvalidInput(format!("Upload is not valid UTF-8: {}", e)))?;

        serde_json::from_str::<serde::de::IgnoredAny>(raw.strip_prefix(UTF8_BOM).unwrap_or(raw))
            .map_err(|e| AppError::InvalidInput(format!("Upload is not valid JSON: {}", e)))?;

        let upload = UploadedJson::new(file_name, raw.to_string());
        log::info!(
            "Stored uploaded JSON {} ({} bytes)",
            upload.file_name.as_deref().unwrap_or("<unnamed>"),
            upload.raw.len()
        );

        *self.current.write().await = Some(upload.clone());
        Ok(upload)
    }

    pub async fn current(&self) -> Option<UploadedJson> {
        self.current.read().await.clone()
    }

    pub async fn clear(&self) {
        *self.current.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_keeps_bytes_verbatim() {
        let store = UploadStore::new();
        let raw = "{\n  \"b\": 1,   \"a\": [true, null, 1.50]\n}\n";

        store
            .put(Some("patient.json".to_string()), raw.as_bytes())
            .await
            .unwrap();

        let current = store.current().await.unwrap();
        assert_eq!(current.raw.as_bytes(), raw.as_bytes());
        assert_eq!(current.file_name.as_deref(), Some("patient.json"));
    }

    #[tokio::test]
    async fn test_put_accepts_byte_order_mark() {
        let store = UploadStore::new();
        let bytes = b"\xEF\xBB\xBF{\"a\": 1}";

        store
            .put(Some("win.json".to_string()), bytes)
            .await
            .unwrap();

        let current = store.current().await.unwrap();
        assert_eq!(current.raw.as_bytes(), bytes);
    }

    #[tokio::test]
    async fn test_any_json_value_accepted() {
        let store = UploadStore::new();
        for raw in ["[]", "42", "\"text\"", "null"] {
            assert!(store.put(None, raw.as_bytes()).await.is_ok(), "{}", raw);
        }
        assert_eq!(store.current().await.unwrap().raw, "null");
    }

    #[tokio::test]
    async fn test_invalid_upload_rejected_and_previous_kept() {
        let store = UploadStore::new();
        store.put(None, b"{\"ok\": true}").await.unwrap();

        let err = store.put(None, b"{not json").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let err = store.put(None, &[0xff, 0xfe]).await.unwrap_err();
        assert!(err.to_string().contains("UTF-8"));

        assert_eq!(store.current().await.unwrap().raw, "{\"ok\": true}");
    }

    #[tokio::test]
    async fn test_clear() {
        let store = UploadStore::new();
        store.put(None, b"{}").await.unwrap();
        store.clear().await;
        assert!(store.current().await.is_none());
    }
}
