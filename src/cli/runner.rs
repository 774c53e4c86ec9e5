//! CLI runner - fetches the requested pool

use crate::cli::commands::Cli;
use crate::config::FetcherConfig;
use crate::error::Result;
use crate::output::LineOutput;
use crate::pagination::{PoolFetcher, RunSummary};
use crate::types::PoolId;
use std::io::Write;
use std::time::Duration;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Fetcher configuration derived from the command line
    pub fn config(&self) -> FetcherConfig {
        let mut builder = FetcherConfig::builder()
            .endpoint(&self.cli.endpoint)
            .timeout(Duration::from_secs(self.cli.timeout));
        if let Some(contact) = &self.cli.contact {
            builder = builder.contact(contact);
        }
        if let Some(agent) = &self.cli.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Fetch the pool to stdout, diagnostics to stderr
    pub async fn run(&self) -> Result<RunSummary> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run_with(stdout.lock(), stderr.lock()).await
    }

    /// Fetch the pool into the given sinks
    pub async fn run_with<O: Write, E: Write>(&self, out: O, err: E) -> Result<RunSummary> {
        let pool = PoolId::from_argument(&self.cli.pool)?;
        let fetcher = PoolFetcher::from_config(self.config())?;
        let mut output = LineOutput::new(out, err);
        fetcher.run(pool, &mut output).await
    }
}
