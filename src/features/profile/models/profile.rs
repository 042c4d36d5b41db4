use serde::{Deserialize, Serialize};

/// Persisted citizen profile
///
/// Stored as a single entry under the profile storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub district: String,
    pub area: String,
    pub pincode: String,
}
