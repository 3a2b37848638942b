use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use csv::Writer;
use serde::Serialize;

use api_types::expense::{ExpenseEntry, Member as MemberEntry};
use api_types::settlement::SettlementRequest;
use engine::{EngineError, Expense, Member, Money, Split, Transfer};

#[derive(Parser, Debug)]
#[command(name = "spartire_cli")]
#[command(about = "Group expense settlement from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute balances and a settlement plan from a group file.
    Settle(SettleArgs),
    /// Divide an amount equally between members.
    Split(SplitArgs),
}

#[derive(Args, Debug)]
struct SettleArgs {
    /// Group file (JSON, the same shape `POST /settlement` accepts).
    #[arg(long, env = "SPARTIRE_GROUP_FILE")]
    file: PathBuf,

    /// Write the plan to this path as CSV instead of printing it.
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Decimal amount (dot or comma separator).
    amount: String,

    /// Number of members splitting the amount.
    members: usize,
}

fn member_from_entry(entry: MemberEntry) -> Member {
    Member::new(entry.id, entry.name)
}

fn expense_from_entry(entry: ExpenseEntry) -> Result<Expense, EngineError> {
    let amount = Money::from_major_f64(entry.amount)?;
    let splits = entry
        .splits
        .into_iter()
        .map(|split| {
            Ok(Split {
                member_id: split.member_id,
                amount_owed: Money::from_major_f64(split.amount_owed)?,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    Expense::new(
        entry.title,
        amount,
        entry.payer_id,
        splits,
        entry.category,
        entry.occurred_at.with_timezone(&Utc),
    )
}

#[derive(Serialize)]
struct PlanRow {
    from: String,
    to: String,
    amount: f64,
}

fn plan_rows(transfers: &[Transfer]) -> Vec<PlanRow> {
    transfers
        .iter()
        .map(|transfer| PlanRow {
            from: transfer.from.clone(),
            to: transfer.to.clone(),
            amount: transfer.amount.to_major_f64(),
        })
        .collect()
}

fn write_plan_csv(path: &Path, transfers: &[Transfer]) -> Result<(), Box<dyn Error + Send + Sync>> {
    let mut writer = Writer::from_path(path)?;
    for row in plan_rows(transfers) {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn settle(args: SettleArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let raw = fs::read_to_string(&args.file)?;
    let group: SettlementRequest = serde_json::from_str(&raw)?;

    let members: Vec<Member> = group.members.into_iter().map(member_from_entry).collect();
    let expenses = group
        .expenses
        .into_iter()
        .map(expense_from_entry)
        .collect::<Result<Vec<_>, _>>()?;

    let balances = engine::compute_balances(&expenses, &members);
    let transfers = engine::simplify_debts(&balances);

    println!("Balances:");
    for (member_id, balance) in &balances {
        println!("  {member_id}: {balance}");
    }

    if let Some(path) = args.csv {
        write_plan_csv(&path, &transfers)?;
        println!("Plan written to {}", path.display());
        return Ok(());
    }

    println!("Plan:");
    if transfers.is_empty() {
        println!("  nothing to settle");
    } else {
        for transfer in &transfers {
            println!("  {transfer}");
        }
    }

    Ok(())
}

fn split(args: SplitArgs) -> Result<(), Box<dyn Error + Send + Sync>> {
    let amount: Money = match args.amount.parse() {
        Ok(amount) => amount,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let shares = match engine::split_equally(amount, args.members) {
        Ok(shares) => shares,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if shares.remainder.is_zero() {
        println!("{} each", shares.base);
    } else {
        println!("{} each, {} extra on the payer", shares.base, shares.remainder);
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Settle(args) => settle(args),
        Command::Split(args) => split(args),
    }
}
