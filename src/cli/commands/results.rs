//! Results view rendering shared by `csv` and `view`.

use serde_json::json;
use std::path::PathBuf;

use crate::artifact::Route;
use crate::cli::CommandContext;
use crate::cli::ui::charts::{render_bars, render_proportion, render_summary};
use crate::constants::messages;
use crate::results::ResultsViewModel;
use crate::types::Result;

const CHART_WIDTH: usize = 40;

#[derive(Debug, Clone, Default)]
pub struct ResultsOptions {
    /// Directory to save the labeled CSV into
    pub download_dir: Option<PathBuf>,
    /// Output format: text, json
    pub format: String,
}

/// Mount the results view for `route`, render it, then tear it down
pub async fn show(ctx: &CommandContext, route: &Route, options: &ResultsOptions) -> Result<()> {
    let view =
        ResultsViewModel::mount(route, ctx.registry.clone(), ctx.results_store()).await;

    let saved = match (&options.download_dir, view.has_results()) {
        (Some(dir), true) => Some(view.download_to(dir).await?),
        _ => None,
    };

    if options.format == "json" {
        let body = json!({
            "fileUrl": view.file_url(),
            "analyzedAt": view.analyzed_at().map(|t| t.to_rfc3339()),
            "statistics": view.statistics(),
            "unrecognizedRows": view.unrecognized(),
            "charts": view.charts(),
            "download": saved.as_ref().map(|p| p.display().to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        render_text(ctx, &view, saved.as_ref());
    }

    view.teardown();
    Ok(())
}

fn render_text(ctx: &CommandContext, view: &ResultsViewModel, saved: Option<&PathBuf>) {
    let out = &ctx.output;

    if !view.has_results() {
        out.info(messages::NO_RESULTS);
        return;
    }

    out.block(&format!("\n{}", render_summary(view.statistics())));
    if let Some(at) = view.analyzed_at() {
        out.info(&format!("Analyzed at {}", at.format("%Y-%m-%d %H:%M:%S UTC")));
    }

    out.section("Pie Chart");
    out.block(&render_proportion(&view.charts().pie, CHART_WIDTH));

    out.section("Bar Chart");
    out.block(&render_bars(&view.charts().bar, CHART_WIDTH));

    if view.unrecognized() > 0 {
        out.info(&format!(
            "{} row(s) without a 0/1 label were not counted",
            view.unrecognized()
        ));
    }

    println!();
    out.block(messages::LABEL_LEGEND);
    match saved {
        Some(path) => out.success(&format!("Saved processed CSV: {}", path.display())),
        None => out.info("Run with --download <DIR> to save the processed CSV"),
    }
}
