//! Data models for Spare Gold.
//!
//! This module defines the catalog entities (Company, CarModel, Variant,
//! SparePart, Booking) and the mirrored identity-provider user record.
//! All IDs are UUID7 hex strings generated at construction time; records are
//! serialized with the field spelling the persisted store has always used
//! (camelCase), so existing on-device data remains readable.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default profile photo shown when the identity provider has none.
pub const DEFAULT_AVATAR_URL: &str = "https://www.w3schools.com/w3images/avatar2.png";

/// Generate a fresh entity ID (UUID7 as 32-char hex).
pub fn new_entity_id() -> String {
    Uuid::now_v7().simple().to_string()
}

/// Check whether an image reference is a hosted URL rather than a local
/// device URI. Records hold either form: a local URI before upload, the
/// hosted URL after a successful upload.
pub fn is_remote_image(reference: &str) -> bool {
    reference.starts_with("https://") || reference.starts_with("http://")
}

/// An automotive company in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier (UUID7 hex)
    pub id: String,
    /// Display name of the company
    pub name: String,
    /// Logo image: hosted URL or local device URI
    pub image: String,
}

impl Company {
    /// Create a new company with a generated ID
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            image: image.into(),
        }
    }
}

/// A car model belonging to a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarModel {
    /// Unique identifier (UUID7 hex)
    pub id: String,
    /// Model name (searchable)
    pub name: String,
    /// Name of the company the model belongs to
    pub company: String,
    /// Production year, kept as entered
    pub year: String,
    /// Free-form description
    pub details: String,
    /// Image: hosted URL or local device URI
    pub image: String,
}

impl CarModel {
    /// Create a new car model with a generated ID
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        year: impl Into<String>,
        details: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            company: company.into(),
            year: year.into(),
            details: details.into(),
            image: image.into(),
        }
    }
}

/// A trim level of a car model.
///
/// `name` carries the parent model's name; `variant` names the trim itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Unique identifier (UUID7 hex)
    pub id: String,
    /// Parent model name (searchable)
    pub name: String,
    /// Trim/variant name (searchable)
    pub variant: String,
    /// Free-form description
    pub details: String,
    /// Image: hosted URL or local device URI
    pub image: String,
}

impl Variant {
    /// Create a new variant with a generated ID
    pub fn new(
        name: impl Into<String>,
        variant: impl Into<String>,
        details: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id(),
            name: name.into(),
            variant: variant.into(),
            details: details.into(),
            image: image.into(),
        }
    }
}

/// A spare part offered for booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SparePart {
    /// Unique identifier (UUID7 hex)
    pub id: String,
    /// Car the part fits
    pub car_name: String,
    /// Part manufacturer
    pub brand: String,
    /// Car make/manufacturer
    pub car_make: String,
    /// Name of the spare part
    pub spare_name: String,
    /// Compatible year, kept as entered
    pub year: String,
    /// Base price as a decimal string (e.g. "1499.50")
    pub price: String,
    /// Image: hosted URL or local device URI; None when no image was picked
    pub image: Option<String>,
}

impl SparePart {
    /// Create a new spare part with a generated ID
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        car_name: impl Into<String>,
        brand: impl Into<String>,
        car_make: impl Into<String>,
        spare_name: impl Into<String>,
        year: impl Into<String>,
        price: impl Into<String>,
        image: Option<String>,
    ) -> Self {
        Self {
            id: new_entity_id(),
            car_name: car_name.into(),
            brand: brand.into(),
            car_make: car_make.into(),
            spare_name: spare_name.into(),
            year: year.into(),
            price: price.into(),
            image,
        }
    }
}

/// A customer booking of a spare part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique identifier (UUID7 hex)
    pub id: String,
    pub customer_name: String,
    pub address: String,
    pub mobile: String,
    pub spare_name: String,
    pub car_name: String,
    pub car_make: String,
    /// Base price as a decimal string; surcharges are computed at receipt time
    pub price: String,
}

impl Booking {
    /// Create a new booking with a generated ID
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        customer_name: impl Into<String>,
        address: impl Into<String>,
        mobile: impl Into<String>,
        spare_name: impl Into<String>,
        car_name: impl Into<String>,
        car_make: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: new_entity_id(),
            customer_name: customer_name.into(),
            address: address.into(),
            mobile: mobile.into(),
            spare_name: spare_name.into(),
            car_name: car_name.into(),
            car_make: car_make.into(),
            price: price.into(),
        }
    }
}

/// Mirror of the identity-provider user record, persisted under the
/// `currentUser` key while a session is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider-assigned user ID
    pub uid: String,
    /// Account email address
    pub email: String,
    /// Display name, if the account has one
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    /// Profile photo URL, if the account has one
    #[serde(rename = "photoURL")]
    pub photo_url: Option<String>,
}

impl UserProfile {
    /// The part of the email before the `@`, or "Guest" with no email.
    /// Screens show this as the short user label.
    pub fn email_prefix(&self) -> &str {
        if self.email.is_empty() {
            return "Guest";
        }
        self.email.split('@').next().unwrap_or("Guest")
    }

    /// Profile photo URL, falling back to the default avatar.
    pub fn photo_or_default(&self) -> &str {
        self.photo_url.as_deref().unwrap_or(DEFAULT_AVATAR_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_creation() {
        let company = Company::new("Tesla", "https://example.com/tesla.png");

        assert_eq!(company.name, "Tesla");
        assert_eq!(company.image, "https://example.com/tesla.png");
        assert_eq!(company.id.len(), 32);
        assert!(company.id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let a = Company::new("A", "img");
        let b = Company::new("B", "img");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_spare_part_camel_case_json() {
        let part = SparePart::new("Model S", "Bosch", "Tesla", "Brake Pad", "2021", "120.00", None);
        let json = serde_json::to_string(&part).unwrap();

        assert!(json.contains("\"carName\""));
        assert!(json.contains("\"spareName\""));
        assert!(json.contains("\"carMake\""));
        assert!(!json.contains("car_name"));
    }

    #[test]
    fn test_booking_round_trip() {
        let booking = Booking::new(
            "Asha",
            "12 MG Road",
            "9876543210",
            "Brake Pad",
            "Model S",
            "Tesla",
            "120.00",
        );
        let json = serde_json::to_string(&booking).unwrap();
        let parsed: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, booking);
    }

    #[test]
    fn test_email_prefix() {
        let user = UserProfile {
            uid: "u1".to_string(),
            email: "asha@example.com".to_string(),
            display_name: None,
            photo_url: None,
        };
        assert_eq!(user.email_prefix(), "asha");
    }

    #[test]
    fn test_email_prefix_empty_is_guest() {
        let user = UserProfile {
            uid: "u1".to_string(),
            email: String::new(),
            display_name: None,
            photo_url: None,
        };
        assert_eq!(user.email_prefix(), "Guest");
    }

    #[test]
    fn test_photo_or_default() {
        let user = UserProfile {
            uid: "u1".to_string(),
            email: "a@b.com".to_string(),
            display_name: None,
            photo_url: None,
        };
        assert_eq!(user.photo_or_default(), DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_user_profile_json_field_names() {
        let user = UserProfile {
            uid: "u1".to_string(),
            email: "a@b.com".to_string(),
            display_name: Some("Asha".to_string()),
            photo_url: Some("https://example.com/p.png".to_string()),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"displayName\""));
        assert!(json.contains("\"photoURL\""));
    }

    #[test]
    fn test_is_remote_image() {
        assert!(is_remote_image("https://res.cloudinary.com/x/image.jpg"));
        assert!(is_remote_image("http://example.com/a.png"));
        assert!(!is_remote_image("file:///data/user/0/app/cache/a.jpg"));
        assert!(!is_remote_image("content://media/external/images/1"));
    }
}
