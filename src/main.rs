//! Timeline-DB: Main entry point

use std::io;

use clap::Parser;
use timeline_db::cli::{session, Cli, Commands, Session};
use timeline_db::config::LoadConfig;
use timeline_db::ingest;
use timeline_db::store::RecordStore;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Load { file, batch_size } => {
            let config = LoadConfig::with_batch_size(batch_size);
            let mut store = RecordStore::new();
            let outcome = ingest::load_path(&mut store, &file, &config)?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            session::display(&store, &mut out)?;
            session::report(&outcome, &mut out)?;
            Ok(())
        }
        Commands::Session { file, batch_size } => {
            let config = LoadConfig::with_batch_size(batch_size);
            config.validate()?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(file, config, stdin.lock(), stdout.lock());
            session.run()?;
            Ok(())
        }
    }
}
