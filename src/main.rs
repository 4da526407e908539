fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fee_ledger=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = fee_ledger::app::run(std::env::args()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
