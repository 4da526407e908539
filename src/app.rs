use std::io::{stdout, BufWriter, Write};

use crate::{
    common::error::AppError,
    domain::ledger::FeeLedger,
    io::{reader, writer},
};

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let commands = reader::read_commands(&mut reader);

    let mut ledger = FeeLedger::new();
    let mut processor = crate::worker::processor::Processor::new();

    // Replies are rendered as they are produced, in command order
    let stdout = stdout();
    let mut out = BufWriter::new(stdout.lock());

    for command in commands {
        let command = command.map_err(AppError::Parse)?;
        let reply = processor.process(&mut ledger, command)?;
        writer::write_reply(&mut out, &reply)?;
    }
    out.flush()?;

    Ok(())
}
