//! View Command
//!
//! Open the results view over a labeled CSV already on disk, without
//! contacting the classifier.

use std::path::Path;

use super::results::{self, ResultsOptions};
use crate::cli::CommandContext;
use crate::types::Result;

pub async fn run(ctx: &CommandContext, file: &Path, options: &ResultsOptions) -> Result<()> {
    let bytes = tokio::fs::read(file).await?;
    let route = ctx
        .registry
        .create(bytes, ctx.config.results.download_name.clone())
        .into_route();

    results::show(ctx, &route, options).await
}
