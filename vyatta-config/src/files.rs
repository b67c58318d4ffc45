//! File boundary for the CLI: reading inputs, parsing them, and writing
//! results either to stdout or to an `--output` path.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info};
use vyatta_config_core::{parse, Document};

/// Read a UTF-8 text file.
pub fn read_text(path: &Path) -> Result<String> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    Ok(text)
}

/// Read and parse a configuration file.
pub fn load_config(path: &Path) -> Result<Document> {
    let text = read_text(path)?;
    let document = parse(&text).with_context(|| format!("failed to parse {}", path.display()))?;
    debug!(path = %path.display(), sections = document.len(), "parsed config");
    Ok(document)
}

/// Write `contents` to `output`, or to stdout when no output path is given.
///
/// An output path that resolves to one of `inputs` is refused.
pub fn emit(output: Option<&Path>, inputs: &[&Path], contents: &str) -> Result<()> {
    let Some(output) = output else {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(contents.as_bytes())
            .context("failed to write to stdout")?;
        return Ok(());
    };

    ensure_output_not_same(output, inputs)?;
    fs::write(output, contents)
        .with_context(|| format!("failed to write output {}", output.display()))?;
    info!(path = %output.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

/// Refuse an output path that resolves to one of the inputs.
pub fn ensure_output_not_same(output: &Path, inputs: &[&Path]) -> Result<()> {
    let target = comparable_path(output)
        .with_context(|| format!("failed to resolve output path {}", output.display()))?;

    for input in inputs {
        let source = comparable_path(input)
            .with_context(|| format!("failed to resolve input path {}", input.display()))?;
        if source == target {
            bail!(
                "refusing to overwrite source file: output {} matches input {}",
                output.display(),
                input.display()
            );
        }
    }
    Ok(())
}

fn comparable_path(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    // Not on disk yet, so symlinks and `..` stay unresolved.
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir().context("current_dir")?.join(path))
    }
}
