use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::profile::dtos::UpdateProfileDto;
use crate::features::profile::models::UserProfile;
use crate::modules::storage::KeyValueStore;
use crate::shared::constants::PROFILE_STORAGE_KEY;

/// Store for the citizen profile
pub struct ProfileService {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the saved profile
    ///
    /// A corrupt entry is treated as absent; the next save overwrites it.
    pub async fn get(&self) -> Result<Option<UserProfile>> {
        let Some(raw) = self.store.get(PROFILE_STORAGE_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!("Discarding corrupt profile entry: {}", e);
                Ok(None)
            }
        }
    }

    /// Validate and persist the profile
    pub async fn save(&self, dto: UpdateProfileDto) -> Result<UserProfile> {
        dto.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let profile = UserProfile::from(dto);
        let raw = serde_json::to_string(&profile)
            .map_err(|e| AppError::Storage(format!("failed to serialize profile: {}", e)))?;
        self.store.set(PROFILE_STORAGE_KEY, raw).await?;

        tracing::info!("Profile saved for {}", profile.name);

        Ok(profile)
    }
}
