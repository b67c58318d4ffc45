use anyhow::{Context, Result};
use tracing::info;
use vyatta_config::files::{emit, load_config, read_text};
use vyatta_config_core::{from_json_str, generate, to_json};

use crate::cli::{GenerateArgs, ParseArgs};

pub fn run_parse(args: ParseArgs) -> Result<()> {
    let document = load_config(&args.file)?;
    let value = to_json(&document)?;

    let mut json = if args.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    json.push('\n');

    info!(
        file = %args.file.display(),
        sections = document.len(),
        "converted config to JSON"
    );
    emit(args.output.as_deref(), &[&args.file], &json)
}

pub fn run_generate(args: GenerateArgs) -> Result<()> {
    let raw = read_text(&args.file)?;
    let document = from_json_str(&raw)
        .with_context(|| format!("failed to read config tree from {}", args.file.display()))?;
    let text = generate(&document);

    info!(
        file = %args.file.display(),
        sections = document.len(),
        "generated config text"
    );
    emit(args.output.as_deref(), &[&args.file], &text)
}
