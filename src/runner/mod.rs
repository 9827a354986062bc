//! Query Runner: acquire, execute one request, report, release.

pub mod explain;
pub mod query;
pub mod report;
pub mod requests;

use log::{debug, error};

use crate::config::RunnerConfig;
use crate::connection::{MongoConnector, with_connection};
use crate::console::Console;

pub use query::Query;
pub use report::{Report, ReportStatus};
pub use requests::SortOrder;

/// Result of one [`QueryRunner::run`]. Failures were already logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Reported(ReportStatus),
    Failed,
}

impl RunOutcome {
    pub fn is_failed(self) -> bool {
        matches!(self, RunOutcome::Failed)
    }
}

pub struct QueryRunner {
    connector: MongoConnector,
    console: Console,
}

impl QueryRunner {
    pub fn new(config: RunnerConfig, console: Console) -> Self {
        Self { connector: MongoConnector::new(config), console }
    }

    pub fn config(&self) -> &RunnerConfig {
        self.connector.config()
    }

    /// Run one operation on its own connection. Errors are logged, never returned.
    pub async fn run(&self, query: &Query) -> RunOutcome {
        debug!("Running {}", query.name());

        let result =
            with_connection(&self.connector, |store| async move { query.execute(&store).await })
                .await;

        let outcome = match result {
            Ok(report) => {
                self.console.lines(report.lines());
                RunOutcome::Reported(report.status())
            }
            Err(err) => {
                error!("{}: {err}", query.failure_context());
                RunOutcome::Failed
            }
        };
        self.console.line("Connection closed");
        outcome
    }

    /// Run operations strictly one after another, each on its own connection.
    /// A failure does not stop the ones after it.
    pub async fn run_all(&self, queries: &[Query]) -> Vec<RunOutcome> {
        let mut outcomes = Vec::with_capacity(queries.len());
        for query in queries {
            outcomes.push(self.run(query).await);
        }
        outcomes
    }
}
