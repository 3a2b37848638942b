//! Month-end spending projection.
//!
//! Extrapolates the current month's spending linearly: what was spent
//! over the elapsed days, scaled to the full month. Early in the month
//! the estimate swings hard with every expense; that is inherent to the
//! formula, not a defect.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{EngineError, Expense, Money, ResultEngine, util::div_rounded};

/// Projects spending to the end of the month.
///
/// Returns `spent * days_in_month / days_elapsed` rounded to the cent.
/// With zero elapsed days there is nothing to extrapolate from, so
/// `spent` comes back unchanged. A zero-day month is rejected with
/// [`EngineError::InvalidArgument`]; dates produced by [`MonthWindow`]
/// can never trigger either degenerate case.
pub fn project_month_end(
    spent: Money,
    days_elapsed: u32,
    days_in_month: u32,
) -> ResultEngine<Money> {
    if days_in_month == 0 {
        return Err(EngineError::InvalidArgument(
            "days_in_month must be > 0".to_string(),
        ));
    }
    if days_elapsed == 0 {
        return Ok(spent);
    }

    let scaled = i128::from(spent.cents()) * i128::from(days_in_month);
    let projected = div_rounded(scaled, i128::from(days_elapsed));
    let cents = i64::try_from(projected)
        .map_err(|_| EngineError::InvalidAmount("projected amount too large".to_string()))?;
    Ok(Money::new(cents))
}

/// Day counts describing how far into a month a date sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthWindow {
    pub days_elapsed: u32,
    pub days_in_month: u32,
}

impl MonthWindow {
    /// Builds the window for `date`: the day of month as elapsed days and
    /// the calendar length of that month.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        let (year, month) = (date.year(), date.month());
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        // The fallback is unreachable before chrono's maximum year.
        let days_in_month = first_of_next
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31);

        Self {
            days_elapsed: date.day(),
            days_in_month,
        }
    }
}

/// Sums the amounts of expenses dated in the given calendar month.
#[must_use]
pub fn month_spent(expenses: &[Expense], year: i32, month: u32) -> Money {
    expenses
        .iter()
        .filter(|expense| {
            let date = expense.occurred_at.date_naive();
            date.year() == year && date.month() == month
        })
        .map(|expense| expense.amount)
        .sum()
}

/// Month-to-date spending together with its projection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthProjection {
    pub spent: Money,
    pub daily_average: Money,
    pub projected: Money,
}

/// Projects the month containing `today` from the given expenses.
///
/// Spending is the sum of all expenses dated in that calendar month;
/// the daily average and the month-end projection both use the elapsed
/// day count of `today`.
pub fn project_for_date(expenses: &[Expense], today: NaiveDate) -> ResultEngine<MonthProjection> {
    let window = MonthWindow::for_date(today);
    let spent = month_spent(expenses, today.year(), today.month());
    let projected = project_month_end(spent, window.days_elapsed, window.days_in_month)?;
    let daily_average = Money::new(
        i64::try_from(div_rounded(
            i128::from(spent.cents()),
            i128::from(window.days_elapsed),
        ))
        .map_err(|_| EngineError::InvalidAmount("daily average too large".to_string()))?,
    );

    Ok(MonthProjection {
        spent,
        daily_average,
        projected,
    })
}
