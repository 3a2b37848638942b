//! Settlement API endpoint.

use axum::Json;

use api_types::settlement::{SettlementRequest, SettlementResponse, TransferView};

use crate::{ServerError, wire};

/// Handle requests for a settlement plan.
///
/// Returns the balances alongside the plan so clients render both from a
/// single round trip.
pub async fn plan(
    Json(payload): Json<SettlementRequest>,
) -> Result<Json<SettlementResponse>, ServerError> {
    let members = wire::members_from_wire(payload.members);
    let expenses = wire::expenses_from_wire(payload.expenses)?;

    let balances = engine::compute_balances(&expenses, &members);
    let transfers = engine::simplify_debts(&balances)
        .into_iter()
        .map(|transfer| TransferView {
            from: transfer.from,
            to: transfer.to,
            amount: transfer.amount.to_major_f64(),
        })
        .collect();

    Ok(Json(SettlementResponse {
        balances: wire::balances_to_wire(&balances),
        transfers,
    }))
}
