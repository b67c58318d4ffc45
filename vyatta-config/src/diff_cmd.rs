use anyhow::{bail, Result};
use serde::Serialize;
use tracing::{debug, info};
use vyatta_config::files::load_config;
use vyatta_config::profile::{load_diff_profile, DiffProfile};
use vyatta_config::report::{count_changes, render_summary, render_text};
use vyatta_config_core::{diff_with_options, DiffEntry};

use crate::cli::{DiffArgs, OutputFormat};

pub fn run_diff(args: DiffArgs) -> Result<()> {
    let left = load_config(&args.file1)?;
    let right = load_config(&args.file2)?;

    let profile = match &args.profile {
        Some(path) => load_diff_profile(path)?,
        None => DiffProfile::default(),
    };
    let opts = profile.to_options(&args.ignore, args.verbose);
    debug!(?opts, "diff options");

    let entries = diff_with_options(&left, &right, &opts);
    let changes = count_changes(&entries);
    info!(entries = entries.len(), changes, "diff complete");

    if args.summary {
        println!("{}", render_summary(&entries));
    } else {
        match args.format {
            OutputFormat::Text => println!("{}", render_text(&entries)),
            OutputFormat::Json => {
                let report = DiffReport {
                    left: args.file1.display().to_string(),
                    right: args.file2.display().to_string(),
                    changes,
                    entries: &entries,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
    }

    if args.strict && changes > 0 {
        bail!("strict mode failed: {changes} differences");
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct DiffReport<'a> {
    left: String,
    right: String,
    changes: usize,
    entries: &'a [DiffEntry],
}
