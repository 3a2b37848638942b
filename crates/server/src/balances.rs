//! Balance API endpoints.

use axum::Json;

use api_types::balance::{BalancesRequest, BalancesResponse};
use api_types::summary::{SummaryRequest, SummaryResponse};

use crate::{ServerError, wire};

/// Handle requests for the net position of every roster member.
pub async fn compute(
    Json(payload): Json<BalancesRequest>,
) -> Result<Json<BalancesResponse>, ServerError> {
    let members = wire::members_from_wire(payload.members);
    let expenses = wire::expenses_from_wire(payload.expenses)?;

    let balances = engine::compute_balances(&expenses, &members);

    Ok(Json(BalancesResponse {
        balances: wire::balances_to_wire(&balances),
    }))
}

/// Handle requests for one member's spending summary.
pub async fn summary(
    Json(payload): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, ServerError> {
    if payload.member_id.is_empty() {
        return Err(ServerError::Generic("member_id required".to_string()));
    }

    let expenses = wire::expenses_from_wire(payload.expenses)?;
    let summary = engine::member_summary(&expenses, &payload.member_id);

    Ok(Json(SummaryResponse {
        total_spent: summary.total_spent.to_major_f64(),
        paid: summary.paid.to_major_f64(),
        share: summary.share.to_major_f64(),
        net: summary.net.to_major_f64(),
    }))
}
