// Discovers the fasta files of a sequence archive and loads them into a
// sequence store.

use super::fasta_tools::read_fasta;
use super::sequence_store::{CollisionPolicy, SequenceStore};
use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// True if `file_name` ends in `.<ext>` or `.<ext>.gz` for one of the
/// extensions.
fn has_fasta_extension(file_name: &str, extensions: &[String]) -> bool {
    let name = file_name.strip_suffix(".gz").unwrap_or(file_name);
    extensions.iter().any(|ext| {
        name.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.len() > 1 && stem.ends_with('.'))
    })
}

/// Lists the archive files of `path`, sorted by file name. A plain file is
/// returned on its own.
pub fn find_fasta_files(path: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(path)
        .with_context(|| format!("Cannot read sequence archive {}", path.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        if has_fasta_extension(&file_name.to_string_lossy(), extensions) {
            files.push(entry.path());
        } else {
            debug!("Skipping {}", entry.path().display());
        }
    }
    files.sort();
    Ok(files)
}

/// Loads every fasta record of the archive at `path` into a new store.
///
/// Records are labelled with the name of the file they were read from.
/// Files are read in file-name order, so collisions resolve the same way
/// on every run.
pub fn load_archive(
    path: &Path,
    extensions: &[String],
    policy: CollisionPolicy,
) -> Result<SequenceStore> {
    info!("Loading sequence archive: {}", path.display());
    let files = find_fasta_files(path, extensions)?;
    if files.is_empty() {
        return Err(anyhow!(
            "No files with extension(s) {:?} found in {}",
            extensions,
            path.display()
        ));
    }

    let mut store = SequenceStore::new(policy);
    for file in files {
        let source = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("Invalid file name: {}", file.display()))?;
        let records = read_fasta(&file)?;
        debug!("{}: {} records", source, records.len());
        for record in records {
            store.insert(&record.id, &source, record.sequence)?;
        }
    }
    if store.is_empty() {
        return Err(anyhow!("No sequences found in {}", path.display()));
    }
    info!("Loaded {} sequences successfully", store.len());
    Ok(store)
}
