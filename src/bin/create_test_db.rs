use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use family_expenses::{NewExpense, initialize_db, insert_expense};

/// A utility for creating a sample expense database for the family expenses server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const SAMPLE_EXPENSES: &[NewExpense<'static>] = &[
    NewExpense {
        payment_classification: "食費",
        amount: 3280.0,
        payment_date: "2025-08-15T18:30:00+09:00",
        comment: Some("スーパーで一週間分の買い物"),
        source: Some("cash"),
    },
    NewExpense {
        payment_classification: "交通費",
        amount: 1120.0,
        payment_date: "2025-08-14T08:05:00+09:00",
        comment: Some("Train pass top-up"),
        source: Some("digital"),
    },
    NewExpense {
        payment_classification: "日用品",
        amount: 860.5,
        payment_date: "2025-08-03",
        comment: None,
        source: Some("digital"),
    },
    NewExpense {
        payment_classification: "医療費",
        amount: 4500.0,
        payment_date: "2025-07-28T10:00:00+09:00",
        comment: Some(
            "Dentist appointment for the kids, including the follow-up check and the fluoride \
            treatment that was recommended at the last visit",
        ),
        source: Some("cash"),
    },
    NewExpense {
        payment_classification: "娯楽費",
        amount: 2400.0,
        payment_date: "2025-07-12T14:00:00+09:00",
        comment: Some("映画"),
        source: Some("other"),
    },
    NewExpense {
        payment_classification: "返金",
        amount: -500.0,
        payment_date: "2025-07-01",
        comment: Some("Refund for a cancelled order"),
        source: None,
    },
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Adding {} sample expenses...", SAMPLE_EXPENSES.len());

    for expense in SAMPLE_EXPENSES {
        insert_expense(expense, &conn)?;
    }

    println!("Success!");

    Ok(())
}
