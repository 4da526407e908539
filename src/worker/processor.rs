use crate::{
    common::{command::LedgerCommand, error::AppError, reply::Reply},
    domain::ledger::FeeLedger,
    worker::handlers::{history, list, payment, register, report},
};

#[derive(Debug, Default)]
pub struct Processor {}
impl Processor {
    pub fn new() -> Self {
        Self {}
    }

    pub fn process(
        &mut self,
        ledger: &mut FeeLedger,
        command: LedgerCommand,
    ) -> Result<Reply, AppError> {
        let reply = match command {
            LedgerCommand::Register {
                student_id,
                name,
                total_fees,
            } => register::handle(ledger, student_id, name, total_fees),
            LedgerCommand::RecordPayment { student_id, amount } => {
                payment::handle(ledger, student_id, amount)
            }
            LedgerCommand::GetReport { student_id } => report::handle(ledger, student_id),
            LedgerCommand::ListAll => list::handle(ledger),
            LedgerCommand::GetHistory { student_id } => history::handle(ledger, student_id),
        };
        Ok(reply)
    }
}
