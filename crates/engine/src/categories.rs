//! Category normalization and spending breakdown.
//!
//! Category labels come from free-form user input, so "Comida", "comida "
//! and "cómida" must land in the same bucket. Keys are normalized with a
//! Unicode NFKD pass that drops combining marks, lowercases, and collapses
//! separators.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{Expense, Money, util::div_rounded};

/// Bucket for expenses without a usable category label.
pub const UNCATEGORIZED: &str = "uncategorized";

/// Normalizes a category label into a bucketing key.
///
/// Decomposes with NFKD and drops combining marks (so accents vanish),
/// lowercases, and collapses any run of non-alphanumerics into a single
/// space. Returns `None` when nothing usable remains.
///
/// # Examples
///
/// ```rust
/// use engine::normalize_category_key;
///
/// assert_eq!(normalize_category_key("  Cómida  "), Some("comida".to_string()));
/// assert_eq!(normalize_category_key("Súper / Almacén"), Some("super almacen".to_string()));
/// assert_eq!(normalize_category_key("  •• "), None);
/// ```
#[must_use]
pub fn normalize_category_key(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut out = String::new();
    let mut prev_space = false;
    for ch in trimmed.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            prev_space = false;
        } else if !out.is_empty() && !prev_space {
            out.push(' ');
            prev_space = true;
        }
    }
    let normalized = out.trim();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized.to_string())
    }
}

/// Spending aggregated under one normalized category key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub key: String,
    pub spent: Money,
    pub count: usize,
    /// Share of the overall total, rounded to the nearest whole percent.
    pub percentage: i64,
}

/// Breaks total spending down by normalized category, largest first.
///
/// Expenses with an empty or unusable category label fall into the
/// [`UNCATEGORIZED`] bucket. Ties on amount order by key so the
/// breakdown is deterministic.
#[must_use]
pub fn spending_by_category(expenses: &[Expense]) -> Vec<CategoryStat> {
    let mut buckets: BTreeMap<String, (Money, usize)> = BTreeMap::new();

    for expense in expenses {
        let key = expense
            .category
            .as_deref()
            .and_then(normalize_category_key)
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        let bucket = buckets.entry(key).or_insert((Money::ZERO, 0));
        bucket.0 += expense.amount;
        bucket.1 += 1;
    }

    let total: Money = expenses.iter().map(|expense| expense.amount).sum();

    let mut stats: Vec<CategoryStat> = buckets
        .into_iter()
        .map(|(key, (spent, count))| CategoryStat {
            percentage: percentage_of(spent, total),
            key,
            spent,
            count,
        })
        .collect();

    stats.sort_by(|a, b| b.spent.cmp(&a.spent).then_with(|| a.key.cmp(&b.key)));
    stats
}

/// Whole-percent share of `part` in `whole`; 0 when `whole` is zero.
fn percentage_of(part: Money, whole: Money) -> i64 {
    if whole.is_zero() {
        return 0;
    }
    let mut numerator = i128::from(part.cents()) * 100;
    let mut denominator = i128::from(whole.cents());
    if denominator < 0 {
        numerator = -numerator;
        denominator = -denominator;
    }
    // Saturates for absurd part/whole ratios.
    i64::try_from(div_rounded(numerator, denominator)).unwrap_or(i64::MAX)
}
