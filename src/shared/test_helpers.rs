#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use std::collections::HashMap;

#[cfg(test)]
use std::sync::Mutex;

#[cfg(test)]
use uuid::Uuid;

#[cfg(test)]
use crate::core::error::AppError;

#[cfg(test)]
use crate::modules::storage::{MediaStore, StoredAsset};

/// Media store double that keeps assets in a map and never touches the
/// network. `fail_uploads` simulates an unreachable host.
#[cfg(test)]
pub struct InMemoryMediaStore {
    pub assets: Mutex<HashMap<String, Vec<u8>>>,
    pub fail_uploads: bool,
}

#[cfg(test)]
impl InMemoryMediaStore {
    pub fn new() -> Self {
        Self {
            assets: Mutex::new(HashMap::new()),
            fail_uploads: false,
        }
    }

    pub fn failing_uploads() -> Self {
        Self {
            fail_uploads: true,
            ..Self::new()
        }
    }
}

#[cfg(test)]
#[async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn upload(&self, data: Vec<u8>, content_type: &str) -> Result<StoredAsset, AppError> {
        if self.fail_uploads {
            return Err(AppError::MediaStore("upload refused".to_string()));
        }

        let ext = match content_type {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/gif" => "gif",
            _ => "bin",
        };
        let public_id = format!("gallery/{}.{}", Uuid::new_v4(), ext);
        self.assets.lock().unwrap().insert(public_id.clone(), data);

        Ok(StoredAsset {
            url: format!("http://media.test/imagedrop-media/{}", public_id),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), AppError> {
        self.assets.lock().unwrap().remove(public_id);
        Ok(())
    }
}
