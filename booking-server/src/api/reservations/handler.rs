//! Reservation API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use shared::error::{AppError, AppResult};
use shared::models::{ReservationConfirmation, ReservationList, ReservationRequest};

/// GET /api/reservations - 获取全部预订
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<ReservationList>> {
    let list = state.booking.list_reservations().await?;
    Ok(Json(list))
}

/// POST /api/reservations - 提交预订
///
/// 请求体结构不符合预期时返回 400 "Invalid reservation data."，与
/// 字段级校验错误共用同一响应信封。
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<serde_json::Value>,
) -> AppResult<Json<ReservationConfirmation>> {
    let request: ReservationRequest = serde_json::from_value(payload)
        .map_err(|_| AppError::validation("Invalid reservation data."))?;

    let confirmation = state.booking.submit(request).await?;
    Ok(Json(confirmation))
}
