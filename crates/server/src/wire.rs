//! Conversions between wire DTOs and engine values.
//!
//! Wire amounts are decimal units; everything past this module is integer
//! cents. Drift in decimal inputs is absorbed here, once.

use std::collections::BTreeMap;

use chrono::Utc;

use api_types::expense::{ExpenseEntry, Member as MemberEntry, SplitEntry};
use engine::{BalanceMap, EngineError, Expense, Member, Money, Split};

pub fn members_from_wire(entries: Vec<MemberEntry>) -> Vec<Member> {
    entries
        .into_iter()
        .map(|entry| Member::new(entry.id, entry.name))
        .collect()
}

pub fn expenses_from_wire(entries: Vec<ExpenseEntry>) -> Result<Vec<Expense>, EngineError> {
    entries.into_iter().map(expense_from_wire).collect()
}

pub fn expense_from_wire(entry: ExpenseEntry) -> Result<Expense, EngineError> {
    let amount = Money::from_major_f64(entry.amount)?;
    let splits = entry
        .splits
        .into_iter()
        .map(split_from_wire)
        .collect::<Result<Vec<_>, _>>()?;

    let mut expense = Expense::new(
        entry.title,
        amount,
        entry.payer_id,
        splits,
        entry.category,
        entry.occurred_at.with_timezone(&Utc),
    )?;
    if let Some(id) = entry.id {
        expense.id = id;
    }

    Ok(expense)
}

fn split_from_wire(entry: SplitEntry) -> Result<Split, EngineError> {
    Ok(Split {
        member_id: entry.member_id,
        amount_owed: Money::from_major_f64(entry.amount_owed)?,
    })
}

pub fn balances_to_wire(balances: &BalanceMap) -> BTreeMap<String, f64> {
    balances
        .iter()
        .map(|(id, balance)| (id.clone(), balance.to_major_f64()))
        .collect()
}
