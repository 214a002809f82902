//! Route log output.
//!
//! This module writes the finished route log, one route per line, either to
//! any writer (usually stdout) or to a file with atomic write operations and
//! optional backup creation.

use crate::config::Config;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `routes` to `writer`, one per line, in the given order.
///
/// # Errors
///
/// Returns an error if writing or flushing fails.
///
/// # Examples
///
/// ```
/// use navreplay::file::saver::write_routes;
///
/// let mut out = Vec::new();
/// write_routes(&mut out, &["https://a.com".to_string(), "https://a.com/x".to_string()]).unwrap();
/// assert_eq!(out, b"https://a.com\nhttps://a.com/x\n");
/// ```
pub fn write_routes<W: Write>(mut writer: W, routes: &[String]) -> Result<()> {
    for route in routes {
        writeln!(writer, "{}", route).context("Failed to write route")?;
    }
    writer.flush().context("Failed to flush routes")?;
    Ok(())
}

/// Saves the route log to a file.
///
/// The file is gzipped when its name ends in `.gz` or `config.compress_output`
/// is set. With `config.create_backup`, an existing file is first copied to
/// `<name>.bak`.
///
/// # Atomic Write
///
/// The routes are staged in a uniquely named temporary file in the target's
/// directory and then persisted over it, so the target is never left
/// partially written and no sibling file is touched.
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Writing to the temp file fails
/// - Renaming the temp file to the target fails
pub fn save_routes_file<P: AsRef<Path>>(path: P, routes: &[String], config: &Config) -> Result<()> {
    let path = path.as_ref();

    let compress = config.compress_output
        || path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext == "gz")
            .unwrap_or(false);

    if config.create_backup && path.exists() {
        backup_existing(path)?;
    }

    let mut data = Vec::new();
    write_routes(&mut data, routes)?;
    persist_atomically(path, &data, compress)?;

    log::info!("Wrote {} route(s) to {}", routes.len(), path.display());
    Ok(())
}

/// Copies `path` to `<file name>.bak` beside it.
fn backup_existing(path: &Path) -> Result<()> {
    let name = path
        .file_name()
        .ok_or_else(|| anyhow::anyhow!("Output path {} has no file name", path.display()))?;
    let mut backup_name = name.to_os_string();
    backup_name.push(".bak");

    fs::copy(path, path.with_file_name(backup_name))
        .with_context(|| format!("Failed to back up {}", path.display()))?;
    Ok(())
}

/// Writes `data` to a uniquely named temp file in the target's directory and
/// persists it over `path`. The temp file is removed if anything fails first.
fn persist_atomically(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    use flate2::write::GzEncoder;
    use flate2::Compression;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;

    if compress {
        let mut encoder = GzEncoder::new(staged.as_file_mut(), Compression::default());
        encoder.write_all(data).context("Failed to compress routes")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        staged.write_all(data).context("Failed to write routes")?;
    }

    staged
        .persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to move routes into {}", path.display()))?;
    Ok(())
}
