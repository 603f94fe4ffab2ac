use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use ridehail_auth::create_token;
use ridehail_config::JwtConfig;
use ridehail_core::{AppError, hash_password, verify_password};
use ridehail_models::{
    Captain, CaptainAuthResponse, CaptainRow, CaptainStatus, CaptainWithPassword, LoginRequest,
    RegisterCaptainDto,
};

use crate::utils::db::is_unique_violation;

const CAPTAIN_COLUMNS: &str = "id, first_name, last_name, email, socket_id, status, \
     vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type, \
     location_lat, location_lng, created_at, updated_at";

pub struct CaptainService;

impl CaptainService {
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn register_captain(
        db: &PgPool,
        dto: RegisterCaptainDto,
        jwt_config: &JwtConfig,
    ) -> Result<CaptainAuthResponse, AppError> {
        let email = dto.email.trim().to_lowercase();

        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM captains WHERE email = $1")
            .bind(&email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow!("Captain already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        let insert = format!(
            "INSERT INTO captains
                (first_name, last_name, email, password, status,
                 vehicle_color, vehicle_plate, vehicle_capacity, vehicle_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {CAPTAIN_COLUMNS}"
        );

        let row = sqlx::query_as::<_, CaptainRow>(&insert)
            .bind(dto.first_name.trim())
            .bind(dto.last_name.as_deref().map(str::trim))
            .bind(&email)
            .bind(&hashed_password)
            .bind(CaptainStatus::default())
            .bind(dto.vehicle.color.trim())
            .bind(dto.vehicle.plate.trim())
            .bind(dto.vehicle.capacity)
            .bind(dto.vehicle.vehicle_type)
            .fetch_one(db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::bad_request(anyhow!("Captain already exists"))
                } else {
                    AppError::from(e)
                }
            })?;

        let captain = Captain::from(row);
        let token = create_token(captain.id, &captain.email, jwt_config)?;

        Ok(CaptainAuthResponse { token, captain })
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_captain(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<CaptainAuthResponse, AppError> {
        let email = dto.email.trim().to_lowercase();
        let select = format!("SELECT {CAPTAIN_COLUMNS}, password FROM captains WHERE email = $1");

        let record = sqlx::query_as::<_, CaptainWithPassword>(&select)
            .bind(&email)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(&dto.password, &record.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let captain = Captain::from(record.captain);
        let token = create_token(captain.id, &captain.email, jwt_config)?;

        Ok(CaptainAuthResponse { token, captain })
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<Captain>, AppError> {
        let select = format!("SELECT {CAPTAIN_COLUMNS} FROM captains WHERE id = $1");

        let row = sqlx::query_as::<_, CaptainRow>(&select)
            .bind(id)
            .fetch_optional(db)
            .await?;

        Ok(row.map(Captain::from))
    }
}
