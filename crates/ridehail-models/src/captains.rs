//! Captain (driver) accounts and their vehicles.
//!
//! Captains are stored flat in the `captains` table; [`CaptainRow`] mirrors
//! the columns and converts into the nested [`Captain`] the API returns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "captain_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CaptainStatus {
    Active,
    #[default]
    Inactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "vehicle_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Car,
    Motorcycle,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Vehicle {
    pub color: String,
    pub plate: String,
    pub capacity: i32,
    pub vehicle_type: VehicleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Captain {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub socket_id: Option<String>,
    pub status: CaptainStatus,
    pub vehicle: Vehicle,
    pub location: Option<Location>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(FromRow, Debug, Clone)]
pub struct CaptainRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub socket_id: Option<String>,
    pub status: CaptainStatus,
    pub vehicle_color: String,
    pub vehicle_plate: String,
    pub vehicle_capacity: i32,
    pub vehicle_type: VehicleType,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CaptainRow> for Captain {
    fn from(row: CaptainRow) -> Self {
        let location = match (row.location_lat, row.location_lng) {
            (Some(lat), Some(lng)) => Some(Location { lat, lng }),
            _ => None,
        };

        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            socket_id: row.socket_id,
            status: row.status,
            vehicle: Vehicle {
                color: row.vehicle_color,
                plate: row.vehicle_plate,
                capacity: row.vehicle_capacity,
                vehicle_type: row.vehicle_type,
            },
            location,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow, Debug, Clone)]
pub struct CaptainWithPassword {
    #[sqlx(flatten)]
    pub captain: CaptainRow,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct VehicleDto {
    #[validate(length(min = 3, message = "Color must be at least 3 characters long"))]
    pub color: String,
    #[validate(length(min = 3, message = "Plate must be at least 3 characters long"))]
    pub plate: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: i32,
    pub vehicle_type: VehicleType,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct RegisterCaptainDto {
    #[validate(length(min = 3, message = "First name must be at least 3 characters long"))]
    pub first_name: String,
    pub last_name: Option<String>,
    #[validate(email(message = "Invalid Email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    #[validate(nested)]
    pub vehicle: VehicleDto,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> CaptainRow {
        CaptainRow {
            id: Uuid::new_v4(),
            first_name: "Tunde".to_string(),
            last_name: None,
            email: "tunde@example.com".to_string(),
            socket_id: None,
            status: CaptainStatus::Inactive,
            vehicle_color: "Black".to_string(),
            vehicle_plate: "LAG-123".to_string(),
            vehicle_capacity: 4,
            vehicle_type: VehicleType::Car,
            location_lat: None,
            location_lng: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_row_into_captain() {
        let captain = Captain::from(row());

        assert_eq!(captain.vehicle.plate, "LAG-123");
        assert_eq!(captain.vehicle.vehicle_type, VehicleType::Car);
        assert!(captain.location.is_none());
    }

    #[test]
    fn test_partial_location_is_dropped() {
        let mut row = row();
        row.location_lat = Some(6.5244);
        assert!(Captain::from(row.clone()).location.is_none());

        row.location_lng = Some(3.3792);
        assert_eq!(
            Captain::from(row).location,
            Some(Location {
                lat: 6.5244,
                lng: 3.3792
            })
        );
    }

    #[test]
    fn test_vehicle_type_wire_format() {
        let parsed: VehicleType = serde_json::from_str(r#""motorcycle""#).unwrap();
        assert_eq!(parsed, VehicleType::Motorcycle);
        assert!(serde_json::from_str::<VehicleType>(r#""bicycle""#).is_err());
        assert_eq!(
            serde_json::to_string(&CaptainStatus::default()).unwrap(),
            r#""inactive""#
        );
    }

    #[test]
    fn test_nested_vehicle_validation() {
        let dto = RegisterCaptainDto {
            first_name: "Tunde".to_string(),
            last_name: None,
            email: "tunde@example.com".to_string(),
            password: "secret1".to_string(),
            vehicle: VehicleDto {
                color: "Re".to_string(),
                plate: "LAG-123".to_string(),
                capacity: 0,
                vehicle_type: VehicleType::Auto,
            },
        };

        let errors = dto.validate().unwrap_err();
        assert!(errors.errors().contains_key("vehicle"));
    }
}
