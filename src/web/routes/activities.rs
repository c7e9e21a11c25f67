use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::error::AppError;
use crate::services::activities_service::{self, ActivityDetails};

#[derive(Debug, Deserialize)]
pub struct RosterQuery {
    // Absent and empty both fail validation as "Email is required".
    pub email: Option<String>,
}

pub async fn list_activities_handler(
    State(pool): State<SqlitePool>,
) -> Result<Json<BTreeMap<String, ActivityDetails>>, AppError> {
    let activities = activities_service::list_activities(&pool).await?;
    Ok(Json(activities))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, AppError> {
    let email = query.email.unwrap_or_default();
    let message = activities_service::signup(&pool, &activity_name, &email).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn withdraw_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<RosterQuery>,
    State(pool): State<SqlitePool>,
) -> Result<Json<Value>, AppError> {
    let email = query.email.unwrap_or_default();
    let message = activities_service::withdraw(&pool, &activity_name, &email).await?;
    Ok(Json(json!({ "message": message })))
}
