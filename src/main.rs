use clap::Parser;
use miette::{IntoDiagnostic, Result};
use restaurant_ops::application::engine::RestaurantEngine;
use restaurant_ops::infrastructure::factory::{SinkConfig, build_sink};
use restaurant_ops::infrastructure::global;
use restaurant_ops::interfaces::csv::event_reader::EventReader;
use restaurant_ops::interfaces::csv::status_writer::StatusWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input events CSV file
    input: PathBuf,

    /// Where event records go: console, file or store.
    #[arg(long, default_value = "console")]
    sink: String,

    /// File appended to by the file sink.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    // Unknown sink names stop here, before any event is read.
    let config = SinkConfig::parse(&cli.sink, cli.log_file).into_diagnostic()?;
    let sink = build_sink(&config);
    global::install(sink.clone());
    global::record("restaurant ops started");

    let engine = RestaurantEngine::new(sink);

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = EventReader::new(file);
    for event in reader.events() {
        match event {
            Ok(event) => {
                let outcome = engine.apply(event).await;
                tracing::debug!(?outcome, "event applied");
            }
            Err(e) => {
                eprintln!("Error reading event: {}", e);
            }
        }
    }

    let statuses = engine.into_results().await;

    StatusWriter::new(io::stdout().lock())
        .write_statuses(statuses)
        .into_diagnostic()?;

    global::record("restaurant ops finished");
    Ok(())
}
