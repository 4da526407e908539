use crate::common::{command::LedgerCommand, money::Money};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers. Only the
/// columns a command needs are filled; the rest stay empty.
struct CsvRow {
    command: String,
    // blank for list rows
    student: Option<String>,
    // filled for register rows only
    name: Option<String>,
    total: Option<String>,
    // filled for payment rows only
    amount: Option<String>,
}

/// Reads and validates command rows from a CSV reader.
///
/// Supported headers: `command,student,name,total,amount`.
/// Normalizes the `command` field to lowercase and requires the columns each
/// command needs (`student`/`name`/`total` for `register`, `student`/`amount`
/// for `payment`, `student` for `report` and `history`); errors include
/// student context where one is known.
///
/// # Examples
///
/// ```
/// use fee_ledger::io::reader::read_commands;
/// use fee_ledger::common::command::LedgerCommand;
/// use csv::ReaderBuilder;
///
/// let data = "command,student,name,total,amount\n\
/// register,S1,Alice,1000,\n\
/// payment,S1,,,25.50\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let commands: Vec<_> = read_commands(&mut rdr).collect();
///
/// assert!(matches!(commands[0], Ok(LedgerCommand::Register { .. })));
/// assert!(matches!(commands[1], Ok(LedgerCommand::RecordPayment { .. })));
/// ```
pub fn read_commands<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<LedgerCommand, String>> + '_ {
    // Map each CSV row into a `LedgerCommand`, normalizing command names and
    // validating the required columns per command.
    rdr.deserialize::<CsvRow>().map(|res| {
        let row = res.map_err(|e| e.to_string())?;
        let kind = row.command.trim().to_ascii_lowercase();

        match kind.as_str() {
            "register" => {
                let student_id = row
                    .student
                    .ok_or_else(|| "register missing student id".to_string())?;
                let name = row
                    .name
                    .ok_or_else(|| format!("register missing name for student {student_id}"))?;
                let total_str = row
                    .total
                    .ok_or_else(|| format!("register missing total for student {student_id}"))?;
                let total_fees = Money::from_str(&total_str).map_err(|e| e.to_string())?;

                Ok(LedgerCommand::Register {
                    student_id,
                    name,
                    total_fees,
                })
            }
            "payment" => {
                let student_id = row
                    .student
                    .ok_or_else(|| "payment missing student id".to_string())?;
                let amt_str = row
                    .amount
                    .ok_or_else(|| format!("payment missing amount for student {student_id}"))?;
                let amount = Money::from_str(&amt_str).map_err(|e| e.to_string())?;

                Ok(LedgerCommand::RecordPayment { student_id, amount })
            }
            "report" => {
                let student_id = row
                    .student
                    .ok_or_else(|| "report missing student id".to_string())?;
                Ok(LedgerCommand::GetReport { student_id })
            }
            "list" => Ok(LedgerCommand::ListAll),
            "history" => {
                let student_id = row
                    .student
                    .ok_or_else(|| "history missing student id".to_string())?;
                Ok(LedgerCommand::GetHistory { student_id })
            }
            other => Err(format!("unknown command: {other}")),
        }
    })
}
