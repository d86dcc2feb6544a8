use async_trait::async_trait;

use crate::core::error::AppError;

/// Capability surface the application needs from object storage.
///
/// Kept minimal on purpose: upload without overwrite, signed read access,
/// existence checks, and deletion. The production implementation is
/// [`super::S3ObjectStore`]; tests substitute an in-memory store.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Check whether an object exists at `key`.
    async fn exists(&self, key: &str) -> Result<bool, AppError>;

    /// Upload `data` at `key`. Never overwrites: returns
    /// `AppError::Conflict` when the key is already taken.
    async fn upload(&self, key: &str, data: Vec<u8>, content_type: &str)
        -> Result<String, AppError>;

    /// Generate a time-limited signed URL granting read access to `key`.
    async fn presign_get(&self, key: &str) -> Result<String, AppError>;

    /// Delete the object at `key`.
    async fn delete(&self, key: &str) -> Result<(), AppError>;
}

#[cfg(test)]
pub mod testing {
    use std::collections::HashMap;
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;

    /// In-memory object store for unit tests. Tracks uploads and lets tests
    /// mark keys as pre-existing or failing.
    #[derive(Default)]
    pub struct MemoryObjectStore {
        objects: Mutex<HashMap<String, Vec<u8>>>,
        broken_keys: Mutex<HashSet<String>>,
    }

    impl MemoryObjectStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populate a key so a later upload collides.
        pub fn seed(&self, key: &str) {
            self.objects
                .lock()
                .unwrap()
                .insert(key.to_string(), Vec::new());
        }

        /// Make presigning fail for this key.
        pub fn break_key(&self, key: &str) {
            self.broken_keys.lock().unwrap().insert(key.to_string());
        }

        pub fn stored_keys(&self) -> Vec<String> {
            let mut keys: Vec<String> = self.objects.lock().unwrap().keys().cloned().collect();
            keys.sort();
            keys
        }
    }

    #[async_trait]
    impl ObjectStore for MemoryObjectStore {
        async fn exists(&self, key: &str) -> Result<bool, AppError> {
            Ok(self.objects.lock().unwrap().contains_key(key))
        }

        async fn upload(
            &self,
            key: &str,
            data: Vec<u8>,
            _content_type: &str,
        ) -> Result<String, AppError> {
            let mut objects = self.objects.lock().unwrap();
            if objects.contains_key(key) {
                return Err(AppError::Conflict(format!(
                    "Object already exists at '{}'",
                    key
                )));
            }
            objects.insert(key.to_string(), data);
            Ok(key.to_string())
        }

        async fn presign_get(&self, key: &str) -> Result<String, AppError> {
            if self.broken_keys.lock().unwrap().contains(key) {
                return Err(AppError::ExternalServiceError(format!(
                    "Failed to sign '{}'",
                    key
                )));
            }
            if !self.objects.lock().unwrap().contains_key(key) {
                return Err(AppError::NotFound(format!("No object at '{}'", key)));
            }
            Ok(format!("https://storage.test/{}?signed", key))
        }

        async fn delete(&self, key: &str) -> Result<(), AppError> {
            self.objects.lock().unwrap().remove(key);
            Ok(())
        }
    }
}
