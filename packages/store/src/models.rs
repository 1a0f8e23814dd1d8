//! # Persisted records
//!
//! The JSON shapes kept under the fixed storage keys. Field names are camelCase
//! on the wire so blobs written by earlier builds of the marketplace still load.
//!
//! | Struct | Key | Notes |
//! |--------|-----|-------|
//! | [`UserRecord`] | `users` (array), `currentUser` (single) | Owns its [`ServiceRecord`]s. `username` is the primary key and never changes. |
//! | [`ServiceRecord`] | nested in `services` | `id` is unique within the owning user. |
//! | [`ReviewRecord`] | `reviews` (array) | Read-only; nothing in the app writes reviews. |
//!
//! Parsing alone only checks shape. Each record also has a `validate` method
//! that [`crate::Repository`] runs on every read, so a blob with a negative
//! price or a rating of 7 is rejected as [`crate::StoreError::Malformed`]
//! instead of reaching a view.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier of a seller's service, unique within its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub u64);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    /// Stored and compared as plain text.
    pub password: String,
    pub is_seller: bool,
    #[serde(default)]
    pub seller_description: String,
    #[serde(default)]
    pub services: Vec<ServiceRecord>,
}

impl UserRecord {
    /// Human-readable account type.
    pub fn account_type(&self) -> &'static str {
        if self.is_seller {
            "Seller"
        } else {
            "Buyer"
        }
    }

    pub fn service(&self, id: ServiceId) -> Option<&ServiceRecord> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.username.is_empty() {
            return Err("user with empty username".to_string());
        }
        let mut seen = HashSet::new();
        for service in &self.services {
            service
                .validate()
                .map_err(|e| format!("user `{}`: {e}", self.username))?;
            if !seen.insert(service.id) {
                return Err(format!(
                    "user `{}` has duplicate service id {}",
                    self.username, service.id
                ));
            }
        }
        Ok(())
    }
}

/// A service offered by a seller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceId,
    pub title: String,
    pub description: String,
    pub price: f64,
    /// Image URI
    pub image: String,
}

impl ServiceRecord {
    pub fn validate(&self) -> Result<(), String> {
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("service {} has invalid price {}", self.id, self.price));
        }
        Ok(())
    }

    /// Price as shown on cards: whole amounts without decimals.
    pub fn display_price(&self) -> String {
        format_price(self.price)
    }
}

/// Format a price exactly as stored, without a trailing `.0` (`50` → `"50"`,
/// `12.345` → `"12.345"`).
pub fn format_price(price: f64) -> String {
    price.to_string()
}

/// A review left by a buyer for a seller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRecord {
    pub id: u64,
    /// Username of the reviewed seller
    pub seller_id: String,
    /// Username of the reviewing buyer
    pub buyer_id: String,
    pub rating: u8,
    pub comment: String,
    pub date: String,
}

impl ReviewRecord {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=5).contains(&self.rating) {
            return Err(format!("review {} has rating {} outside 1-5", self.id, self.rating));
        }
        Ok(())
    }

    /// Date rendered as `M/D/YYYY`. Falls back to the raw string when it is
    /// neither an RFC 3339 timestamp nor a plain `YYYY-MM-DD` date.
    pub fn display_date(&self) -> String {
        let date = DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDate::parse_from_str(&self.date, "%Y-%m-%d"));
        match date {
            Ok(d) => d.format("%-m/%-d/%Y").to_string(),
            Err(_) => self.date.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: u64, price: f64) -> ServiceRecord {
        ServiceRecord {
            id: ServiceId(id),
            title: "Logo".to_string(),
            description: "A logo".to_string(),
            price,
            image: "https://example.com/logo.png".to_string(),
        }
    }

    #[test]
    fn test_user_json_uses_camel_case() {
        let json = r#"{
            "username": "sara",
            "email": "sara@example.com",
            "password": "pw",
            "isSeller": true,
            "sellerDescription": "Designer",
            "services": [{"id": 1700000000000, "title": "Logo", "description": "d", "price": 35, "image": "i"}]
        }"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert!(user.is_seller);
        assert_eq!(user.seller_description, "Designer");
        assert_eq!(user.services[0].id, ServiceId(1_700_000_000_000));
        assert_eq!(user.services[0].price, 35.0);

        let back = serde_json::to_value(&user).unwrap();
        assert!(back.get("isSeller").is_some());
        assert!(back.get("sellerDescription").is_some());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let json = r#"{"username": "bob", "email": "b@x", "password": "pw", "isSeller": false}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.seller_description, "");
        assert!(user.services.is_empty());
        assert_eq!(user.account_type(), "Buyer");
    }

    #[test]
    fn test_validate_rejects_bad_services() {
        let mut user = UserRecord {
            username: "sara".to_string(),
            email: String::new(),
            password: String::new(),
            is_seller: true,
            seller_description: String::new(),
            services: vec![service(1, 10.0), service(2, -1.0)],
        };
        assert!(user.validate().unwrap_err().contains("invalid price"));

        user.services = vec![service(1, 10.0), service(1, 12.0)];
        assert!(user.validate().unwrap_err().contains("duplicate service id"));

        user.services = vec![service(1, 10.0), service(2, f64::NAN)];
        assert!(user.validate().is_err());

        user.services = vec![service(1, 0.0)];
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_review_rating_bounds() {
        let mut review = ReviewRecord {
            id: 1,
            seller_id: "sara".to_string(),
            buyer_id: "bob".to_string(),
            rating: 5,
            comment: "Great".to_string(),
            date: "2024-03-05".to_string(),
        };
        assert!(review.validate().is_ok());
        review.rating = 0;
        assert!(review.validate().is_err());
        review.rating = 6;
        assert!(review.validate().is_err());
    }

    #[test]
    fn test_review_display_date() {
        let mut review = ReviewRecord {
            id: 1,
            seller_id: "sara".to_string(),
            buyer_id: "bob".to_string(),
            rating: 4,
            comment: String::new(),
            date: "2024-03-05".to_string(),
        };
        assert_eq!(review.display_date(), "3/5/2024");

        review.date = "2024-11-20T10:15:00Z".to_string();
        assert_eq!(review.display_date(), "11/20/2024");

        review.date = "last week".to_string();
        assert_eq!(review.display_date(), "last week");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(50.0), "50");
        assert_eq!(format_price(12.5), "12.5");
        assert_eq!(format_price(12.345), "12.345");
        assert_eq!(service(1, 99.99).display_price(), "99.99");
    }
}
