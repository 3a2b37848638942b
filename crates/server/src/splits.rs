//! Equal-split API endpoint.

use axum::Json;

use api_types::split::{SplitRequest, SplitResponse};
use engine::Money;

use crate::ServerError;

/// Handle requests to divide an amount equally.
pub async fn equal(Json(payload): Json<SplitRequest>) -> Result<Json<SplitResponse>, ServerError> {
    let total = Money::from_major_f64(payload.amount)?;
    let shares = engine::split_equally(total, payload.member_count)?;

    Ok(Json(SplitResponse {
        base: shares.base.to_major_f64(),
        remainder: shares.remainder.to_major_f64(),
    }))
}
