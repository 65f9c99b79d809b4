//! Availability API Handlers

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::core::ServerState;
use shared::error::AppResult;
use shared::schedule::parse_date;

/// Query string for `GET /api/availability`
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    date: Option<String>,
}

/// GET /api/availability - 查询档期
///
/// 带 `date` 参数时返回该日期的不可用时段；否则返回全部记录。
pub async fn query(
    State(state): State<ServerState>,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Response> {
    // 空 date 参数等同于未提供
    match params.date.as_deref().filter(|d| !d.is_empty()) {
        Some(raw) => {
            let date = parse_date(raw)?;
            let body = state.booking.availability_for(date).await?;
            Ok(Json(body).into_response())
        }
        None => {
            let body = state.booking.availability_dump().await?;
            Ok(Json(body).into_response())
        }
    }
}
