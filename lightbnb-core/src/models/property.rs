//! Property listings

use serde::{Deserialize, Serialize};

/// Property row as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Payload for creating a property; the id is assigned on insertion.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail_photo_url: String,
    #[serde(default)]
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub post_code: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewProperty {
    /// Attach an id, producing a stored property.
    pub fn with_id(self, id: i32) -> Property {
        Property {
            id,
            owner_id: self.owner_id,
            title: self.title,
            description: self.description,
            thumbnail_photo_url: self.thumbnail_photo_url,
            cover_photo_url: self.cover_photo_url,
            cost_per_night: self.cost_per_night,
            parking_spaces: self.parking_spaces,
            number_of_bathrooms: self.number_of_bathrooms,
            number_of_bedrooms: self.number_of_bedrooms,
            country: self.country,
            street: self.street,
            city: self.city,
            province: self.province,
            post_code: self.post_code,
            active: self.active,
        }
    }
}

/// Property with its average review rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyWithRating {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_uses_defaults() {
        let new: NewProperty = serde_json::from_str(
            r#"{"owner_id": 3, "title": "Cozy loft", "cost_per_night": 12500, "city": "Vancouver"}"#,
        )
        .unwrap();
        assert!(new.active);
        assert_eq!(new.parking_spaces, 0);

        let property = new.with_id(7);
        assert_eq!(property.id, 7);
        assert_eq!(property.owner_id, 3);
        assert_eq!(property.city, "Vancouver");
    }

    #[test]
    fn rating_is_flattened() {
        let property = PropertyWithRating {
            property: serde_json::from_str(
                r#"{"id": 1, "owner_id": 1, "title": "t", "cost_per_night": 100, "city": "Oak Bay"}"#,
            )
            .unwrap(),
            average_rating: 4.5,
        };
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["average_rating"], 4.5);
    }
}
