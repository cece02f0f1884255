//! The expense schema and the queries behind the expense API.
//!
//! Expenses are read through `expenses_view`, which exposes upper-case column
//! names and orders rows newest first. Rows are read without a fixed schema so
//! that columns added to the view show up without code changes.

use rusqlite::{
    Connection, Statement, ToSql, Transaction, TransactionBehavior, named_params, types::ValueRef,
};

use crate::{
    Error,
    month::MonthKey,
    row::{CellValue, Row},
};

/// Create the tables and views of the application if they do not exist.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_expense_table(&transaction)?;
    create_expenses_view(&transaction)?;

    transaction.commit()?;

    Ok(())
}

pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            payment_classification TEXT NOT NULL,
            amount REAL NOT NULL,
            payment_date TEXT NOT NULL,
            comment TEXT,
            source TEXT
        )",
        (),
    )?;

    // Serves the newest first order and the monthly date range.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_payment_date ON expense(payment_date)",
        (),
    )?;

    Ok(())
}

pub fn create_expenses_view(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE VIEW IF NOT EXISTS expenses_view AS
        SELECT
            payment_classification AS PAYMENT_CLASSIFICATION,
            amount AS AMOUNT,
            payment_date AS PAYMENT_DATE,
            comment AS COMMENT,
            source AS SOURCE
        FROM expense
        ORDER BY payment_date DESC, id DESC",
        (),
    )?;

    Ok(())
}

/// An expense to be inserted into the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense<'a> {
    /// What the expense was for, e.g. "Food".
    pub payment_classification: &'a str,
    /// The amount paid in yen.
    pub amount: f64,
    /// An ISO 8601 date, optionally followed by a time, e.g. "2025-08-15T12:00:00+09:00".
    pub payment_date: &'a str,
    /// Free text shown in the comment column.
    pub comment: Option<&'a str>,
    /// Either "cash" or "digital", other values are shown without highlighting.
    pub source: Option<&'a str>,
}

/// Insert `expense` and return its ID.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn insert_expense(expense: &NewExpense, connection: &Connection) -> Result<i64, Error> {
    connection.execute(
        "INSERT INTO expense (payment_classification, amount, payment_date, comment, source)
        VALUES (?1, ?2, ?3, ?4, ?5)",
        (
            expense.payment_classification,
            expense.amount,
            expense.payment_date,
            expense.comment,
            expense.source,
        ),
    )?;

    Ok(connection.last_insert_rowid())
}

/// Every expense, newest first.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn select_all_expenses(connection: &Connection) -> Result<Vec<Row>, Error> {
    let mut statement = connection.prepare("SELECT * FROM expenses_view")?;

    query_rows(&mut statement, &[])
}

/// The expenses paid in `month`, newest first.
///
/// Payment dates are ISO 8601 text, so comparing them as strings against the
/// first days of this and the next month ignores the time of day and any
/// timezone suffix.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn select_monthly_expenses(
    connection: &Connection,
    month: &MonthKey,
) -> Result<Vec<Row>, Error> {
    let start = month.first_day().to_string();
    let end = month.next().map(|next| next.first_day().to_string());

    let mut statement = connection.prepare(
        "SELECT * FROM expenses_view
        WHERE PAYMENT_DATE >= :start
            AND (:end IS NULL OR PAYMENT_DATE < :end)",
    )?;

    query_rows(&mut statement, named_params! { ":start": start, ":end": end })
}

fn query_rows(
    statement: &mut Statement,
    params: &[(&str, &dyn ToSql)],
) -> Result<Vec<Row>, Error> {
    let column_names: Vec<String> = statement
        .column_names()
        .into_iter()
        .map(str::to_owned)
        .collect();

    statement
        .query_map(params, |sql_row| {
            column_names
                .iter()
                .enumerate()
                .map(|(index, name)| -> Result<(&str, CellValue), rusqlite::Error> {
                    Ok((name.as_str(), map_value(sql_row.get_ref(index)?)))
                })
                .collect::<Result<Row, rusqlite::Error>>()
        })?
        .map(|row_result| row_result.map_err(Error::from))
        .collect()
}

fn map_value(value: ValueRef) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(integer) => CellValue::from(integer),
        ValueRef::Real(real) => CellValue::Number(real),
        ValueRef::Text(text) | ValueRef::Blob(text) => {
            CellValue::Text(String::from_utf8_lossy(text).into_owned())
        }
    }
}

#[cfg(test)]
mod create_table_tests {
    use rusqlite::Connection;

    use super::{create_expense_table, create_expenses_view, initialize};

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_expense_table(&connection));
        assert_eq!(Ok(()), create_expenses_view(&connection));
    }

    #[test]
    fn initialize_can_run_twice() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), initialize(&connection));
        assert_eq!(Ok(()), initialize(&connection));
    }
}
