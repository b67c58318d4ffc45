use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use vyatta_config::files::{emit, load_config};
use vyatta_config::inspect::render_tree;
use vyatta_config::logging::init_logging;
use vyatta_config_core::{generate_section, Leaf, NodeRef, PATH_SEPARATOR};

mod cli;
mod convert_cmd;
mod diff_cmd;
mod fmt_cmd;

use cli::{Cli, Command, GetArgs, InspectArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Command::Parse(args) => convert_cmd::run_parse(args),
        Command::Generate(args) => convert_cmd::run_generate(args),
        Command::Fmt(args) => fmt_cmd::run_fmt(args),
        Command::Inspect(args) => run_inspect(args),
        Command::Get(args) => run_get(args),
        Command::Diff(args) => diff_cmd::run_diff(args),
    }
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let document = load_config(&args.file)?;

    let mut out = String::new();
    match &args.section {
        Some(label) => {
            let section = document
                .get(label)
                .with_context(|| format!("section '{label}' not found"))?;
            out.push_str(&render_tree(label, section, args.depth));
        }
        None => {
            for (label, section) in document.iter() {
                out.push_str(&render_tree(label, section, args.depth));
            }
        }
    }

    print!("{out}");
    Ok(())
}

fn run_get(args: GetArgs) -> Result<()> {
    let document = load_config(&args.file)?;

    // A single argument may carry a whole diff-style path.
    let segments: Vec<&str> = match args.path.as_slice() {
        [joined] => joined.split(PATH_SEPARATOR).collect(),
        many => many.iter().map(String::as_str).collect(),
    };
    debug!(path = ?segments, "resolving path");

    let node = document
        .get_path(&segments)
        .with_context(|| format!("path '{}' not found", segments.join(PATH_SEPARATOR)))?;

    let out = match node {
        NodeRef::Section(section) => generate_section(section, 0),
        NodeRef::Leaf(Leaf::Flag) => "true\n".to_string(),
        NodeRef::Leaf(leaf) => leaf
            .values()
            .iter()
            .map(|value| format!("{value}\n"))
            .collect(),
    };
    emit(None, &[], &out)
}
