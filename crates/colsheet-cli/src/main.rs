//! Load a JSON column layout and print the resulting column snapshots
//!
//! Usage:
//!   colsheet <layout.json>             # Report to stdout
//!   colsheet <layout.json> --sheet     # Full worksheet JSON instead

mod layout;

use anyhow::Context;
use std::env;
use std::fs;
use tracing_subscriber::EnvFilter;

use colsheet_core::SheetConfig;

use crate::layout::{Layout, LayoutReport};

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(input_path) = args.get(1) else {
        anyhow::bail!("Usage: colsheet <layout.json> [--sheet]");
    };
    let full_sheet = args.iter().skip(2).any(|a| a == "--sheet");

    let config = SheetConfig::from_env().context("invalid COLSHEET_* configuration")?;
    tracing::debug!(?config, "loaded configuration");

    let json = fs::read_to_string(input_path)
        .with_context(|| format!("reading {input_path}"))?;
    let sheet = Layout::from_json(&json)
        .with_context(|| format!("parsing {input_path}"))?
        .build(config)?;

    tracing::info!(
        sheet = %sheet.name,
        columns = sheet.column_count(),
        rows = sheet.row_count(),
        "built worksheet"
    );

    let output = if full_sheet {
        sheet.to_json_pretty()?
    } else {
        serde_json::to_string_pretty(&LayoutReport::from_sheet(&sheet)?)?
    };
    println!("{output}");

    Ok(())
}
