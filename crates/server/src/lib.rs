use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::EngineError;

use serde::Serialize;
pub use server::{run, run_with_listener, spawn_with_listener};

mod balances;
mod server;
mod settlements;
mod splits;
mod statistics;
mod wire;

#[cfg(test)]
mod routes_tests;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{ExpenseEntry, Member, SplitEntry};
        pub use engine::Expense;
    }

    pub mod balance {
        pub use api_types::balance::{BalancesRequest, BalancesResponse};
    }

    pub mod settlement {
        pub use api_types::settlement::{SettlementRequest, SettlementResponse, TransferView};
        pub use engine::Transfer;
    }

    pub mod split {
        pub use api_types::split::{SplitRequest, SplitResponse};
    }

    pub mod summary {
        pub use api_types::summary::{SummaryRequest, SummaryResponse};
    }

    pub mod projection {
        pub use api_types::projection::{ProjectionRequest, ProjectionResponse};
    }

    pub mod category {
        pub use api_types::category::{CategoriesRequest, CategoriesResponse, CategoryView};
    }
}

pub enum ServerError {
    Engine(EngineError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidArgument(_) | EngineError::InvalidAmount(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}
