use anyhow::anyhow;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use ridehail_auth::create_token;
use ridehail_config::JwtConfig;
use ridehail_core::{AppError, hash_password, verify_password};
use ridehail_models::{LoginRequest, RegisterUserDto, User, UserAuthResponse, UserWithPassword};

use crate::utils::db::is_unique_violation;

pub struct UserService;

impl UserService {
    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn register_user(
        db: &PgPool,
        dto: RegisterUserDto,
        jwt_config: &JwtConfig,
    ) -> Result<UserAuthResponse, AppError> {
        let email = dto.email.trim().to_lowercase();

        let existing = sqlx::query_scalar::<_, Uuid>("SELECT id FROM users WHERE email = $1")
            .bind(&email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow!("User already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (first_name, last_name, email, password)
             VALUES ($1, $2, $3, $4)
             RETURNING id, first_name, last_name, email, socket_id, created_at, updated_at",
        )
        .bind(dto.first_name.trim())
        .bind(dto.last_name.as_deref().map(str::trim))
        .bind(&email)
        .bind(&hashed_password)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::bad_request(anyhow!("User already exists"))
            } else {
                AppError::from(e)
            }
        })?;

        let token = create_token(user.id, &user.email, jwt_config)?;

        Ok(UserAuthResponse { token, user })
    }

    #[instrument(skip(db, dto, jwt_config), fields(email = %dto.email))]
    pub async fn login_user(
        db: &PgPool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<UserAuthResponse, AppError> {
        let email = dto.email.trim().to_lowercase();

        let record = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, first_name, last_name, email, socket_id, created_at, updated_at, password
             FROM users WHERE email = $1",
        )
        .bind(&email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

        if !verify_password(&dto.password, &record.password)? {
            return Err(AppError::unauthorized("Invalid email or password"));
        }

        let token = create_token(record.user.id, &record.user.email, jwt_config)?;

        Ok(UserAuthResponse {
            token,
            user: record.user,
        })
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, socket_id, created_at, updated_at
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
