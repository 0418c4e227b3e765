use crate::error::{CliError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DOWNLOAD_BASE_URL: &str = "https://files.rcsb.org/download";

/// Resolves a structure argument to a local file: existing paths are used
/// as-is, anything else is treated as a PDB id and fetched into `dir`.
pub async fn resolve_structure(target: &str, dir: &Path) -> Result<PathBuf> {
    let candidate = Path::new(target);
    if candidate.is_file() {
        return Ok(candidate.to_path_buf());
    }
    if !is_pdb_id(target) {
        return Err(CliError::Argument(format!(
            "'{target}' is neither an existing file nor a PDB id"
        )));
    }
    download_structure(target, dir, false).await
}

/// Downloads one structure file from RCSB, skipping the download when a cached
/// copy exists unless `force` is set.
pub async fn download_structure(id: &str, dir: &Path, force: bool) -> Result<PathBuf> {
    let destination = dir.join(format!("{id}.pdb"));
    if destination.is_file() && !force {
        info!("Using cached structure file {}.", destination.display());
        return Ok(destination);
    }
    std::fs::create_dir_all(dir)?;

    let url = format!("{DOWNLOAD_BASE_URL}/{id}.pdb");
    info!("Downloading {url}");
    let client = reqwest::Client::new();
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(CliError::Download {
            id: id.to_string(),
            status: response.status(),
        });
    }
    let body = response.bytes().await?;
    std::fs::write(&destination, &body)?;
    debug!("Wrote {} bytes to {}.", body.len(), destination.display());
    Ok(destination)
}

fn is_pdb_id(id: &str) -> bool {
    id.len() == 4 && id.chars().all(|c| c.is_ascii_alphanumeric())
}
