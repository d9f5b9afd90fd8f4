//! Text Command
//!
//! Classify a single text given as an argument or on stdin.

use tokio::io::AsyncReadExt;

use crate::cli::CommandContext;
use crate::orchestrator::TextSession;
use crate::types::Result;

pub async fn run(ctx: &CommandContext, text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    let orchestrator = ctx.orchestrator()?;
    let mut session = TextSession::new();
    session.set_text(text.trim_end_matches(['\r', '\n']));

    let verdict = session.submit(&orchestrator).await?;

    ctx.output.header("Analysis Result:");
    if verdict.is_error() {
        ctx.output.error(verdict.message());
    } else {
        ctx.output.block(verdict.message());
    }
    Ok(())
}
