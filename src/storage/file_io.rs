//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. Line
//! stores and JSON stores share the same write-to-temp-then-rename path.

use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::BudgetError;

/// Read a line-oriented store
///
/// Returns `Ok(None)` when the file does not exist. Bytes that are not valid
/// UTF-8 are replaced line by line instead of failing the whole store, so
/// every line survives. Any other read failure is an error; callers must not
/// overwrite a store they could not read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, BudgetError> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(BudgetError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let contents = String::from_utf8_lossy(&bytes);
    if let Cow::Owned(_) = contents {
        warn!(path = %path.display(), "Store is not valid UTF-8, replacing invalid bytes");
    }

    let lines: Vec<String> = contents.lines().map(str::to_string).collect();
    debug!(path = %path.display(), lines = lines.len(), "Loaded line store");
    Ok(Some(lines))
}

/// Write a line-oriented store atomically, one item per line
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), BudgetError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    write_atomic(path.as_ref(), |writer| {
        for line in lines {
            writeln!(writer, "{}", line.as_ref())?;
        }
        Ok(())
    })
}

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, BudgetError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| BudgetError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| BudgetError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), BudgetError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_atomic(path.as_ref(), |writer| {
        serde_json::to_writer_pretty(&mut *writer, data)?;
        Ok(())
    })
}

/// Write to a sibling temp file, sync, then rename over the target
///
/// The target is either completely written or not modified at all.
fn write_atomic<F>(path: &Path, fill: F) -> Result<(), BudgetError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), BudgetError>,
{
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target, so the rename stays on one filesystem
    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let file = File::create(&temp_path)
        .map_err(|e| BudgetError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    let written = fill(&mut writer)
        .and_then(|_| writer.flush().map_err(BudgetError::from))
        .and_then(|_| writer.get_ref().sync_all().map_err(BudgetError::from));

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(BudgetError::Storage(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        BudgetError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    debug!(path = %path.display(), "Wrote store");
    Ok(())
}
