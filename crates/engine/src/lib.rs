pub use balance::{BalanceMap, MemberSummary, compute_balances, member_summary};
pub use categories::{CategoryStat, UNCATEGORIZED, normalize_category_key, spending_by_category};
pub use error::EngineError;
pub use expense::{Expense, Member, Split};
pub use money::Money;
pub use projection::{
    MonthProjection, MonthWindow, month_spent, project_for_date, project_month_end,
};
pub use settlement::{Transfer, simplify_debts};
pub use split::{EqualSplit, split_equally};

mod balance;
mod categories;
mod error;
mod expense;
mod money;
mod projection;
mod settlement;
mod split;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
