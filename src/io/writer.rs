use std::io::{self, Write};

use crate::common::{money::Money, reply::Reply};
use crate::domain::account::StudentAccount;

/// Writes one reply to the output as human-readable text.
///
/// Mutations produce a single confirmation line; queries produce a block:
/// a per-student fee report, the full roster, or a numbered payment history.
/// Monetary fields are formatted as `$` plus 2 decimal places using
/// `to_string_2dp()`.
///
/// # Errors
///
/// Returns an `io::Error` if writing any line fails.
///
/// # Examples
///
/// ```
/// use fee_ledger::io::writer::write_reply;
/// use fee_ledger::common::reply::Reply;
///
/// let reply = Reply::PaymentRecorded { student_id: "S1".to_string() };
///
/// let mut out = Vec::new();
/// write_reply(&mut out, &reply).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "Payment successful.\n");
/// ```
pub fn write_reply<W: Write>(mut writer: W, reply: &Reply) -> io::Result<()> {
    match reply {
        Reply::Registered { student_id } => writeln!(writer, "Registered student {student_id}."),
        Reply::PaymentRecorded { .. } => writeln!(writer, "Payment successful."),
        Reply::StudentNotFound { .. } => writeln!(writer, "Student not found."),
        Reply::Report(account) => write_report(&mut writer, account),
        Reply::Roster(accounts) => write_roster(&mut writer, accounts),
        Reply::History {
            student_id,
            payments,
        } => write_history(&mut writer, student_id, payments),
    }
}

fn write_report<W: Write>(writer: &mut W, account: &StudentAccount) -> io::Result<()> {
    writeln!(writer, "Name: {}", account.name)?;
    writeln!(writer, "Total Fees: ${}", account.total_fees)?;
    writeln!(writer, "Paid Fees: ${}", account.paid_fees)?;
    writeln!(writer, "Remaining Fees: ${}", account.remaining_fees())
}

fn write_roster<W: Write>(writer: &mut W, accounts: &[StudentAccount]) -> io::Result<()> {
    writeln!(writer, "-------- List of Students --------")?;
    for account in accounts {
        writeln!(writer, "Student ID: {}", account.student_id)?;
        write_report(writer, account)?;
        writeln!(writer)?;
    }
    Ok(())
}

fn write_history<W: Write>(writer: &mut W, student_id: &str, payments: &[Money]) -> io::Result<()> {
    writeln!(
        writer,
        "-------- Payment Transaction History for Student {student_id} --------"
    )?;
    for (i, amount) in payments.iter().enumerate() {
        writeln!(writer, "Payment {}: ${}", i + 1, amount)?;
    }
    Ok(())
}
