use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use shared::config::ClientConfig;

/// Writes a default client configuration into `output_dir`.
///
/// # Arguments
/// * `format` - The format of the configuration file ("yaml" or "json").
/// * `output_dir` - Directory the file is created in.
///
/// # Errors
/// Returns an error if the format is unsupported or if writing the file fails.
pub fn generate_config(format: &str, output_dir: &Path) -> Result<PathBuf> {
    let config = ClientConfig::default();
    let (file_name, serialized) = match format {
        "yaml" => ("codeastra.yaml", serde_yml::to_string(&config)?),
        "json" => ("codeastra.json", serde_json::to_string_pretty(&config)?),
        other => bail!("Unsupported format '{other}'. Use 'yaml' or 'json'."),
    };

    let path = output_dir.join(file_name);
    fs::write(&path, serialized)
        .with_context(|| format!("failed to write {}", path.display()))?;

    Ok(path)
}
