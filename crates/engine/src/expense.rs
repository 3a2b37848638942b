//! Expense primitives.
//!
//! An `Expense` is a shared purchase: one member pays the full amount and
//! every participant owes their share back through a `Split`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, Money, ResultEngine, split::split_equally};

/// A member of the group being settled.
///
/// The roster is managed by the caller; the engine never validates
/// membership. Ids are opaque strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
}

impl Member {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One participant's share of an expense.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Split {
    pub member_id: String,
    pub amount_owed: Money,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub title: String,
    pub amount: Money,
    pub payer_id: String,
    pub splits: Vec<Split>,
    pub category: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl Expense {
    /// Creates an expense with explicit per-member shares.
    ///
    /// The engine does not require the shares to add up to `amount`; the
    /// store owns that consistency. The amount itself must be positive.
    pub fn new(
        title: String,
        amount: Money,
        payer_id: String,
        splits: Vec<Split>,
        category: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title,
            amount,
            payer_id,
            splits,
            category,
            occurred_at,
        })
    }

    /// Creates an expense split equally among `participants`.
    ///
    /// Shares are penny-exact: everyone owes the floored per-head share and
    /// the leftover cents land on the payer, so the shares always add up to
    /// `amount`. When the payer is not among the participants, the first
    /// participant takes the leftover instead.
    ///
    /// Fails with [`EngineError::InvalidArgument`] when `participants` is
    /// empty.
    pub fn split_equally_among(
        title: String,
        amount: Money,
        payer_id: String,
        participants: &[String],
        category: Option<String>,
        occurred_at: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        let shares = split_equally(amount, participants.len())?;

        let mut splits: Vec<Split> = participants
            .iter()
            .map(|member_id| Split {
                member_id: member_id.clone(),
                amount_owed: shares.base,
            })
            .collect();

        if !shares.remainder.is_zero() {
            let index = participants
                .iter()
                .position(|id| *id == payer_id)
                .unwrap_or(0);
            splits[index].amount_owed += shares.remainder;
        }

        Self::new(title, amount, payer_id, splits, category, occurred_at)
    }

    /// Sum of the recorded shares. Equals `amount` for expenses built with
    /// [`Expense::split_equally_among`]; may drift for store-supplied splits.
    #[must_use]
    pub fn split_total(&self) -> Money {
        self.splits.iter().map(|split| split.amount_owed).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn new_rejects_non_positive_amount() {
        let expense = Expense::new(
            "Cena".to_string(),
            Money::ZERO,
            "alice".to_string(),
            Vec::new(),
            None,
            Utc::now(),
        );
        assert_eq!(
            expense.unwrap_err(),
            EngineError::InvalidAmount("amount must be > 0".to_string())
        );
    }

    #[test]
    fn equal_split_shares_add_up_exactly() {
        let expense = Expense::split_equally_among(
            "Cena".to_string(),
            Money::new(100_00),
            "alice".to_string(),
            &ids(&["alice", "bob", "carla"]),
            None,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(expense.split_total(), expense.amount);
        let alice = &expense.splits[0];
        assert_eq!(alice.member_id, "alice");
        assert_eq!(alice.amount_owed, Money::new(33_34));
        assert_eq!(expense.splits[1].amount_owed, Money::new(33_33));
        assert_eq!(expense.splits[2].amount_owed, Money::new(33_33));
    }

    #[test]
    fn leftover_falls_back_to_first_participant() {
        let expense = Expense::split_equally_among(
            "Taxi".to_string(),
            Money::new(10_00),
            "dana".to_string(),
            &ids(&["alice", "bob", "carla"]),
            None,
            Utc::now(),
        )
        .unwrap();

        assert_eq!(expense.split_total(), expense.amount);
        assert_eq!(expense.splits[0].amount_owed, Money::new(3_34));
        assert_eq!(expense.splits[1].amount_owed, Money::new(3_33));
        assert_eq!(expense.splits[2].amount_owed, Money::new(3_33));
    }

    #[test]
    fn equal_split_requires_participants() {
        let expense = Expense::split_equally_among(
            "Cena".to_string(),
            Money::new(100_00),
            "alice".to_string(),
            &[],
            None,
            Utc::now(),
        );
        assert!(matches!(
            expense.unwrap_err(),
            EngineError::InvalidArgument(_)
        ));
    }
}
