use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Member {
        pub id: String,
        pub name: String,
    }

    /// One participant's share of an expense.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitEntry {
        pub member_id: String,
        /// Decimal amount owed (e.g. 33.33); converted to cents server-side.
        pub amount_owed: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseEntry {
        /// Store row id (UUID). Generated when absent.
        pub id: Option<Uuid>,
        pub title: String,
        /// Decimal amount paid (e.g. 100.0); must be > 0.
        pub amount: f64,
        pub payer_id: String,
        pub splits: Vec<SplitEntry>,
        pub category: Option<String>,
        /// RFC3339 timestamp, including timezone offset (local user time).
        pub occurred_at: DateTime<FixedOffset>,
    }
}

pub mod balance {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalancesRequest {
        pub members: Vec<expense::Member>,
        pub expenses: Vec<expense::ExpenseEntry>,
    }

    /// Net position per member id: positive is owed, negative owes.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct BalancesResponse {
        pub balances: BTreeMap<String, f64>,
    }
}

pub mod settlement {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettlementRequest {
        pub members: Vec<expense::Member>,
        pub expenses: Vec<expense::ExpenseEntry>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransferView {
        pub from: String,
        pub to: String,
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SettlementResponse {
        pub balances: BTreeMap<String, f64>,
        /// Ordered plan; paying every transfer settles the whole group.
        pub transfers: Vec<TransferView>,
    }
}

pub mod split {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitRequest {
        /// Decimal amount to divide (e.g. 100.0).
        pub amount: f64,
        pub member_count: usize,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SplitResponse {
        /// Per-member share, rounded down to the cent.
        pub base: f64,
        /// Leftover cents; one member (the payer) covers these on top.
        pub remainder: f64,
    }
}

pub mod summary {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryRequest {
        pub expenses: Vec<expense::ExpenseEntry>,
        pub member_id: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummaryResponse {
        /// Total spent by the whole group.
        pub total_spent: f64,
        pub paid: f64,
        pub share: f64,
        pub net: f64,
    }
}

pub mod projection {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProjectionRequest {
        pub expenses: Vec<expense::ExpenseEntry>,
        /// Reference day (ISO 8601 date); the projection covers its month.
        pub date: NaiveDate,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ProjectionResponse {
        pub spent: f64,
        pub daily_average: f64,
        pub projected: f64,
        pub days_elapsed: u32,
        pub days_in_month: u32,
    }
}

pub mod category {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoriesRequest {
        pub expenses: Vec<expense::ExpenseEntry>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryView {
        /// Normalized category key; accent and case variants fold together.
        pub key: String,
        pub spent: f64,
        pub count: usize,
        /// Share of total spending, rounded to a whole percent.
        pub percentage: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoriesResponse {
        pub categories: Vec<CategoryView>,
    }
}
