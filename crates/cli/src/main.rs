//! # Ripple
//!
//! Watches a DNS change spread from a domain's authoritative nameservers out
//! to public resolvers, either once from the terminal or as an HTTP service.

mod bootstrap;
mod console;
mod di;
mod server;

use anyhow::bail;
use clap::Parser;
use console::ConsolePrinter;
use ripple_api::AppState;
use ripple_application::events::ProgressEmitter;
use ripple_domain::{CheckRequest, CliOverrides, RunOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "ripple")]
#[command(version)]
#[command(about = "Watch a DNS record propagate from authoritative servers to public resolvers")]
struct Cli {
    /// Config file path (TOML)
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Record type: a, aaaa, txt, cname, mx
    #[arg(short = 't', long = "type")]
    record_type: Option<String>,

    /// Value the record must contain
    #[arg(short = 'm', long = "match")]
    match_value: Option<String>,

    /// How long to keep checking (e.g. 30s, 2m)
    #[arg(short = 'w', long = "wait", value_parser = humantime::parse_duration)]
    timeout: Option<Duration>,

    /// Interval between sweeps (e.g. 5s)
    #[arg(short = 'r', long, value_parser = humantime::parse_duration)]
    retry: Option<Duration>,

    /// Serve the HTTP API on this address instead (e.g. :8080)
    #[arg(long)]
    serve: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    write_config: Option<PathBuf>,

    /// Domain to check
    domain: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            listen: self.serve.clone(),
            timeout: self.timeout,
            retry: self.retry,
            record_type: self.record_type.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    if let Some(path) = &cli.write_config {
        config.save(path)?;
        println!("Configuration written to {}", path.display());
        return Ok(ExitCode::SUCCESS);
    }

    bootstrap::init_logging(&config);
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        server_mode = config.is_server_mode(),
        "Configuration loaded"
    );

    let defaults = config.run_defaults()?;
    let services = di::Services::new(&defaults);

    if config.is_server_mode() {
        let state = AppState {
            check_propagation: services.check_propagation,
            defaults: Arc::new(defaults),
        };
        server::start_web_server(config.listen_addr()?, state).await?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(domain) = cli.domain else {
        bail!("a domain is required (see --help)");
    };
    let Some(match_value) = cli.match_value.filter(|m| !m.is_empty()) else {
        bail!("-m (match) is required");
    };

    let run = CheckRequest {
        domain,
        match_value,
        ..Default::default()
    }
    .into_run_config(&defaults)?;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, stopping");
                cancel.cancel();
            }
        });
    }

    let mut printer = ConsolePrinter::new(std::io::stdout(), run.criteria.record_type);
    printer.header(&run)?;

    let (emitter, mut events) = ProgressEmitter::new_enabled(ProgressEmitter::DEFAULT_CAPACITY);
    let use_case = services.check_propagation.clone();
    let engine = {
        let run = run.clone();
        tokio::spawn(async move { use_case.execute(&run, &emitter, &cancel).await })
    };

    while let Some(event) = events.recv().await {
        printer.event(&event)?;
    }

    match engine.await? {
        Ok(report) => {
            printer.summary(&report)?;
            Ok(match report.outcome {
                RunOutcome::Completed => ExitCode::SUCCESS,
                RunOutcome::Timeout | RunOutcome::Cancelled => ExitCode::FAILURE,
            })
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
