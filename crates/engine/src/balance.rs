//! Balance aggregation.
//!
//! Balances are derived fresh from the full expense list on every call;
//! nothing here is incremental or persisted. Positive means the member is
//! owed money, negative means the member owes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Expense, Member, Money};

/// Net position per member id.
///
/// A `BTreeMap` keeps iteration in id order, which makes everything
/// derived from a balance map (settlement plans included) deterministic.
pub type BalanceMap = BTreeMap<String, Money>;

/// Computes the net balance of every member from scratch.
///
/// Every roster member appears in the output, zero-balance members
/// included. Per expense, the payer is credited the full amount and each
/// split participant is debited their share; a payer splitting their own
/// expense nets the two effects naturally.
///
/// Ids that appear in an expense but not in the roster get an entry of
/// their own instead of being dropped — dropping them would break the
/// sum-to-zero property of a closed expense set.
#[must_use]
pub fn compute_balances(expenses: &[Expense], members: &[Member]) -> BalanceMap {
    let mut balances: BalanceMap = members
        .iter()
        .map(|member| (member.id.clone(), Money::ZERO))
        .collect();

    for expense in expenses {
        *balances
            .entry(expense.payer_id.clone())
            .or_insert(Money::ZERO) += expense.amount;

        for split in &expense.splits {
            *balances
                .entry(split.member_id.clone())
                .or_insert(Money::ZERO) -= split.amount_owed;
        }
    }

    balances
}

/// One member's view of the group: how much the group spent, how much
/// they fronted, the share they owe, and the resulting net position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberSummary {
    pub total_spent: Money,
    pub paid: Money,
    pub share: Money,
    pub net: Money,
}

/// Summarizes the group's spending from one member's point of view.
///
/// `net` equals `paid - share`, which is the same figure
/// [`compute_balances`] reports for the member.
#[must_use]
pub fn member_summary(expenses: &[Expense], member_id: &str) -> MemberSummary {
    let mut total_spent = Money::ZERO;
    let mut paid = Money::ZERO;
    let mut share = Money::ZERO;

    for expense in expenses {
        total_spent += expense.amount;
        if expense.payer_id == member_id {
            paid += expense.amount;
        }
        for split in &expense.splits {
            if split.member_id == member_id {
                share += split.amount_owed;
            }
        }
    }

    MemberSummary {
        total_spent,
        paid,
        share,
        net: paid - share,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::Split;

    fn roster() -> Vec<Member> {
        vec![
            Member::new("alice", "Alice"),
            Member::new("bob", "Bob"),
            Member::new("carla", "Carla"),
        ]
    }

    fn expense(amount: i64, payer: &str, shares: &[(&str, i64)]) -> Expense {
        Expense::new(
            "Cena".to_string(),
            Money::new(amount),
            payer.to_string(),
            shares
                .iter()
                .map(|(member_id, owed)| Split {
                    member_id: member_id.to_string(),
                    amount_owed: Money::new(*owed),
                })
                .collect(),
            None,
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn empty_expenses_zero_every_member() {
        let balances = compute_balances(&[], &roster());
        assert_eq!(balances.len(), 3);
        assert!(balances.values().all(|balance| balance.is_zero()));
    }

    #[test]
    fn payer_in_own_split_nets_out() {
        let expenses = vec![expense(
            90_00,
            "alice",
            &[("alice", 30_00), ("bob", 30_00), ("carla", 30_00)],
        )];
        let balances = compute_balances(&expenses, &roster());

        assert_eq!(balances["alice"], Money::new(60_00));
        assert_eq!(balances["bob"], Money::new(-30_00));
        assert_eq!(balances["carla"], Money::new(-30_00));
    }

    #[test]
    fn balances_sum_to_zero_for_closed_sets() {
        let expenses = vec![
            expense(
                90_00,
                "alice",
                &[("alice", 30_00), ("bob", 30_00), ("carla", 30_00)],
            ),
            expense(40_00, "bob", &[("alice", 20_00), ("carla", 20_00)]),
        ];
        let balances = compute_balances(&expenses, &roster());
        let total: Money = balances.values().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn unknown_ids_get_their_own_entry() {
        let expenses = vec![expense(50_00, "dana", &[("bob", 25_00), ("erik", 25_00)])];
        let balances = compute_balances(&expenses, &roster());

        assert_eq!(balances["dana"], Money::new(50_00));
        assert_eq!(balances["erik"], Money::new(-25_00));
        assert_eq!(balances["alice"], Money::ZERO);
        let total: Money = balances.values().sum();
        assert_eq!(total, Money::ZERO);
    }

    #[test]
    fn summary_matches_balance_map() {
        let expenses = vec![
            expense(
                90_00,
                "alice",
                &[("alice", 30_00), ("bob", 30_00), ("carla", 30_00)],
            ),
            expense(40_00, "bob", &[("alice", 20_00), ("carla", 20_00)]),
        ];

        let summary = member_summary(&expenses, "alice");
        assert_eq!(summary.total_spent, Money::new(130_00));
        assert_eq!(summary.paid, Money::new(90_00));
        assert_eq!(summary.share, Money::new(50_00));
        assert_eq!(summary.net, Money::new(40_00));

        let balances = compute_balances(&expenses, &roster());
        assert_eq!(balances["alice"], summary.net);
    }
}
