use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use search_reindexer::{Dependencies, LogFormat, Settings};
use search_reindexer_pipeline::Termination;

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let settings = Settings::parse();
    init_tracing(settings.log_format);

    let deps = match Dependencies::new(&settings) {
        Ok(deps) => deps,
        Err(e) => {
            error!(error = %e, "Failed to initialize re-indexer");
            std::process::exit(1);
        }
    };

    let summary = deps.reindexer.run().await;

    if let Termination::ReadFailed(e) = &summary.termination {
        warn!(error = %e, "Run ended on a failed read");
    }

    info!(
        start_index = summary.start_index,
        position = summary.position,
        documents = summary.documents_processed,
        pages = summary.pages_processed,
        total_found = summary.total_found,
        commits = summary.commits_attempted,
        write_failures = summary.write_failures,
        commit_failures = summary.commit_failures,
        next_start = summary.next_start,
        termination = ?summary.termination,
        "Re-index complete"
    );
}
