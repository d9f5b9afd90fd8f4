//! Health Command
//!
//! Check that the classifier service answers on its root endpoint.

use crate::cli::CommandContext;
use crate::types::Result;

pub async fn run(ctx: &CommandContext) -> Result<()> {
    let client = ctx.client()?;

    match client.health_check().await {
        Ok(greeting) => {
            ctx.output
                .success(&format!("Classifier at {} is up", client.base_url()));
            ctx.output.block(greeting.trim());
            Ok(())
        }
        Err(e) => {
            ctx.output
                .error(&format!("Classifier at {} is unreachable", client.base_url()));
            Err(e)
        }
    }
}
