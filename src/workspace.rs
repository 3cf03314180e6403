use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Read the diff file and flatten it to a single line.
///
/// The file must already exist; commands that need it bail out here before
/// any model call happens. Newlines are stripped, everything else is passed
/// through untouched.
pub fn load_input(path: &Path) -> Result<String> {
    if !path.exists() {
        bail!("the file {} does not exist", path.display());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(data.replace('\n', ""))
}

/// Write the generated release notes, replacing any previous run's output.
pub fn write_release_notes(path: &Path, notes: &str) -> Result<()> {
    fs::write(path, notes)
        .with_context(|| format!("failed to write release notes to {}", path.display()))?;
    Ok(())
}
