//! JSON document files
//!
//! Reads treat a missing file as "no document". Writes go to a temp file in
//! the same directory and are renamed into place, so readers never see a
//! half-written document.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read and decode a JSON document; `Ok(None)` if the file does not exist
///
/// # Errors
///
/// Returns `PersistError::Read` for I/O failures other than a missing file
/// and `PersistError::Parse` for malformed documents.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, PersistError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(PersistError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&contents)
        .map(Some)
        .map_err(|source| PersistError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Encode `value` as pretty JSON and atomically replace `path` with it
///
/// # Errors
///
/// Returns `PersistError::Encode` if serialization fails and
/// `PersistError::Write` if the directory, temp file or rename fails.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PersistError> {
    let mut data = serde_json::to_vec_pretty(value).map_err(|source| PersistError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    data.push(b'\n');
    atomic_write(path, &data).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `data` via a sibling temp file
///
/// # Errors
///
/// Returns any I/O error from creating the directory, writing or renaming.
pub fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    temp.write_all(data)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Remove a file, treating "already gone" as success
///
/// # Errors
///
/// Returns any other I/O error.
pub fn remove_if_exists(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}
