//! City domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::CITY_DELETED_MESSAGE;

/// City domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Server-generated identifier, never changes once assigned
    pub id: i32,
    pub name: String,
    pub additional_info: String,
}

/// City creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateCity {
    pub name: String,
    pub additional_info: String,
}

impl CreateCity {
    pub fn new(name: impl Into<String>, additional_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            additional_info: additional_info.into(),
        }
    }

    /// Combine the input fields with the id assigned by storage
    pub fn into_city(self, id: i32) -> City {
        City {
            id,
            name: self.name,
            additional_info: self.additional_info,
        }
    }
}

/// City update data transfer object.
///
/// Both fields are replaced unconditionally; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateCity {
    pub name: String,
    pub additional_info: String,
}

impl UpdateCity {
    pub fn new(name: impl Into<String>, additional_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            additional_info: additional_info.into(),
        }
    }

    /// Combine the new field values with the id of the updated row
    pub fn into_city(self, id: i32) -> City {
        City {
            id,
            name: self.name,
            additional_info: self.additional_info,
        }
    }
}

/// City response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CityResponse {
    /// Unique city identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// City name
    #[cfg_attr(feature = "openapi", schema(example = "Paris"))]
    pub name: String,
    /// Freeform description
    #[cfg_attr(feature = "openapi", schema(example = "capital"))]
    pub additional_info: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            additional_info: city.additional_info,
        }
    }
}

/// Message-only response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MessageResponse {
    #[cfg_attr(feature = "openapi", schema(example = "City deleted"))]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Confirmation returned by a successful delete
    pub fn city_deleted() -> Self {
        Self::new(CITY_DELETED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_city_takes_assigned_id() {
        let city = CreateCity::new("Paris", "capital").into_city(1);

        assert_eq!(
            city,
            City {
                id: 1,
                name: "Paris".to_string(),
                additional_info: "capital".to_string(),
            }
        );
    }

    #[test]
    fn test_update_city_keeps_target_id() {
        let city = UpdateCity::new("Paris", "city of light").into_city(7);

        assert_eq!(city.id, 7);
        assert_eq!(city.additional_info, "city of light");
    }

    #[test]
    fn test_city_response_json_shape() {
        let response = CityResponse::from(CreateCity::new("Paris", "capital").into_city(1));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Paris", "additional_info": "capital"})
        );
    }

    #[test]
    fn test_city_deleted_message() {
        let json = serde_json::to_value(MessageResponse::city_deleted()).unwrap();
        assert_eq!(json, serde_json::json!({"message": "City deleted"}));
    }
}
