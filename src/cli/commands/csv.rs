//! CSV Command
//!
//! Upload a single-column CSV for analysis and show the results view.
//!
//! Usage:
//!   bullyscan csv <FILE> [--download DIR] [-f json]

use std::path::Path;

use super::results::{self, ResultsOptions};
use crate::cli::CommandContext;
use crate::client::CsvUpload;
use crate::orchestrator::CsvSubmission;
use crate::types::Result;

pub async fn run(ctx: &CommandContext, file: &Path, options: &ResultsOptions) -> Result<()> {
    let upload = CsvUpload::from_path(file).await?;
    let orchestrator = ctx.orchestrator()?;

    match orchestrator.submit_csv(&upload).await {
        CsvSubmission::Navigate(route) => results::show(ctx, &route, options).await,
        CsvSubmission::Rejected(message) => {
            ctx.output.error(&message);
            Ok(())
        }
        // already logged; stay where we are
        CsvSubmission::Failed(e) => Err(e),
    }
}
