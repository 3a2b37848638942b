//! Debt simplification.
//!
//! Turns a balance map into a short list of transfers that settles the
//! whole group, so three people who shared a dozen expenses pay each
//! other once or twice instead of reimbursing every receipt.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{BalanceMap, Money};

/// A settlement payment: `from` pays `to` the given positive amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: String,
    pub to: String,
    pub amount: Money,
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.from, self.to, self.amount)
    }
}

/// Computes a settlement plan that zeroes every balance.
///
/// Members with negative balance (debtors) are matched greedily against
/// members with positive balance (creditors): both sides are sorted by
/// magnitude, largest first, and each step transfers
/// `min(debtor remaining, creditor remaining)`, advancing whichever side
/// was drained. The plan emits at most `debtors + creditors - 1`
/// transfers.
///
/// The ordering breaks magnitude ties by member id, so equal inputs
/// always produce the identical plan. Debtors and creditors are strictly
/// non-zero by construction, which means every emitted transfer is at
/// least one cent and nobody ever pays themselves.
///
/// A balanced map drains both sides together. If the input does not sum
/// to zero the loop ends when one side empties and the excess stays
/// unsettled; callers feeding the output of
/// [`compute_balances`](crate::compute_balances) over a closed expense
/// set never hit that case.
#[must_use]
pub fn simplify_debts(balances: &BalanceMap) -> Vec<Transfer> {
    let mut debtors: Vec<(&str, Money)> = Vec::new();
    let mut creditors: Vec<(&str, Money)> = Vec::new();

    for (member_id, balance) in balances {
        if balance.is_negative() {
            debtors.push((member_id.as_str(), balance.abs()));
        } else if balance.is_positive() {
            creditors.push((member_id.as_str(), *balance));
        }
    }

    debtors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    creditors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let amount = debtors[i].1.min(creditors[j].1);

        transfers.push(Transfer {
            from: debtors[i].0.to_string(),
            to: creditors[j].0.to_string(),
            amount,
        });

        debtors[i].1 -= amount;
        creditors[j].1 -= amount;

        if debtors[i].1.is_zero() {
            i += 1;
        }
        if creditors[j].1.is_zero() {
            j += 1;
        }
    }

    transfers
}
