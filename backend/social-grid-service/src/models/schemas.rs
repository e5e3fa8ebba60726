//! Collection schemas
//!
//! Each struct describes the records of one collection. The collection name
//! is the lowercase entity name.

use super::Entity;
use bson::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Minimal user profile for the social grid
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Profile {
    /// Unique username/handle
    #[validate(length(min = 1))]
    pub handle: String,
    /// Public display name
    #[validate(length(min = 1))]
    pub display_name: String,
    /// Avatar image URL
    pub avatar_url: Option<String>,
    /// Short bio
    pub bio: Option<String>,
}

impl Entity for Profile {
    const COLLECTION: &'static str = "profile";
}

/// Lightweight post for the activity feed
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Post {
    /// Handle of the author
    #[validate(length(min = 1))]
    pub author_handle: String,
    /// Post content
    #[validate(length(max = 280))]
    pub text: String,
    /// Optional image
    pub image_url: Option<String>,
    /// Like count
    #[serde(default)]
    #[validate(range(min = 0))]
    #[schema(minimum = 0)]
    pub likes: i64,
    /// Creation timestamp; set on insert when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Post {
    const COLLECTION: &'static str = "post";

    fn to_document(&self) -> Result<Document, bson::ser::Error> {
        let mut document = bson::to_document(self)?;
        // Stored as a BSON datetime so the store can order on it
        if let Some(created_at) = self.created_at {
            document.insert("created_at", bson::DateTime::from_chrono(created_at));
        }
        Ok(document)
    }
}

/// Follow edge between two handles
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Follow {
    /// Follower handle
    #[validate(length(min = 1))]
    pub follower: String,
    /// Following handle
    #[validate(length(min = 1))]
    pub following: String,
}

impl Entity for Follow {
    const COLLECTION: &'static str = "follow";
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    /// Full name
    pub name: String,
    /// Email address
    #[validate(email)]
    pub email: String,
    /// Address
    pub address: String,
    /// Age in years
    #[validate(range(min = 0, max = 120))]
    #[schema(minimum = 0, maximum = 120)]
    pub age: Option<i32>,
    /// Whether user is active
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Entity for User {
    const COLLECTION: &'static str = "user";
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Product title
    pub title: String,
    /// Product description
    pub description: Option<String>,
    /// Price in dollars
    #[validate(range(min = 0.0))]
    #[schema(minimum = 0)]
    pub price: f64,
    /// Product category
    pub category: String,
    /// Whether product is in stock
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

impl Entity for Product {
    const COLLECTION: &'static str = "product";
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::Bson;
    use chrono::TimeZone;

    fn post(text: &str) -> Post {
        Post {
            author_handle: "alice".into(),
            text: text.into(),
            image_url: None,
            likes: 0,
            created_at: None,
        }
    }

    #[test]
    fn post_text_length_is_counted_in_characters() {
        assert!(post(&"a".repeat(280)).validate().is_ok());
        assert!(post(&"a".repeat(281)).validate().is_err());
        // 280 multi-byte characters still fit
        assert!(post(&"é".repeat(280)).validate().is_ok());
    }

    #[test]
    fn negative_likes_are_rejected() {
        let mut p = post("hi");
        p.likes = -1;
        assert!(p.validate().is_err());
    }

    #[test]
    fn post_document_keeps_nulls_and_omits_missing_created_at() {
        let document = post("hi").to_document().unwrap();

        assert_eq!(document.get("image_url"), Some(&Bson::Null));
        assert_eq!(document.get_i64("likes").unwrap(), 0);
        assert!(document.get("created_at").is_none());
    }

    #[test]
    fn post_document_stores_created_at_as_datetime() {
        let mut p = post("hi");
        p.created_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

        let document = p.to_document().unwrap();
        let stored = document.get_datetime("created_at").unwrap();
        assert_eq!(stored.timestamp_millis(), 1_714_564_800_000);
    }

    #[test]
    fn user_age_and_email_are_checked() {
        let user = User {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            address: "1 Loop Rd".into(),
            age: Some(36),
            is_active: true,
        };
        assert!(user.validate().is_ok());

        let too_old = User {
            age: Some(121),
            ..user.clone()
        };
        assert!(too_old.validate().is_err());

        let bad_email = User {
            email: "nope".into(),
            ..user
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn product_defaults_and_price_floor() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "title": "Grid poster",
            "price": 12.5,
            "category": "merch"
        }))
        .unwrap();
        assert!(product.in_stock);
        assert!(product.validate().is_ok());

        let negative = Product {
            price: -1.0,
            ..product
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn collection_names_are_lowercase_entity_names() {
        assert_eq!(Profile::COLLECTION, "profile");
        assert_eq!(Post::COLLECTION, "post");
        assert_eq!(Follow::COLLECTION, "follow");
        assert_eq!(User::COLLECTION, "user");
        assert_eq!(Product::COLLECTION, "product");
    }
}
