use serde::Deserialize;
use validator::Validate;

use crate::features::profile::models::UserProfile;
use crate::shared::validation::{PHONE_REGEX, PINCODE_REGEX};

/// Request DTO for saving the citizen profile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileDto {
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "District is required"))]
    pub district: String,

    pub area: String,

    #[validate(regex(path = *PINCODE_REGEX, message = "Pincode must be 6 digits"))]
    pub pincode: String,
}

impl From<UpdateProfileDto> for UserProfile {
    fn from(dto: UpdateProfileDto) -> Self {
        Self {
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            district: dto.district,
            area: dto.area,
            pincode: dto.pincode,
        }
    }
}
