use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use vyatta_config::files::{emit, read_text};
use vyatta_config_core::{generate, parse};

use crate::cli::FmtArgs;

pub fn run_fmt(args: FmtArgs) -> Result<()> {
    let original = read_text(&args.file)?;
    let document =
        parse(&original).with_context(|| format!("failed to parse {}", args.file.display()))?;
    let formatted = generate(&document);

    if args.check {
        if formatted != original {
            let line = first_difference(&original, &formatted);
            debug!(file = %args.file.display(), line, "first non-canonical line");
            bail!(
                "{} is not canonically formatted (first difference at line {line})",
                args.file.display()
            );
        }
        info!(file = %args.file.display(), "already canonical");
        return Ok(());
    }

    emit(args.output.as_deref(), &[&args.file], &formatted)
}

/// 1-based line number of the first line that differs.
fn first_difference(left: &str, right: &str) -> usize {
    let mut left_lines = left.lines();
    let mut right_lines = right.lines();
    let mut line = 1;
    loop {
        match (left_lines.next(), right_lines.next()) {
            (Some(l), Some(r)) if l == r => line += 1,
            _ => return line,
        }
    }
}
