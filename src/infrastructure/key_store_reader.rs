use crate::domain::key_pair::KeyStore;
use crate::error::AppError;
use crate::infrastructure::crypto::certificate;
use crate::ui::logger::Logger;
use crate::utils::files::{is_hidden, private_key_path, public_key_stem};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads every `<stem>-public.pem` key pair in `dir`.
///
/// A directory that does not exist is an empty store, reported as a warning.
/// Anything else that prevents reading the whole directory is a
/// [`AppError::StoreRead`] naming `dir`; no partial store is returned.
pub fn read_store(dir: &Path, logger: &Logger) -> Result<KeyStore, AppError> {
    let metadata = match fs::metadata(dir) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            logger.warn(&format!("Keys directory {} does not exist", dir.display()), None);
            return Ok(KeyStore::new());
        }
        Err(e) => {
            return Err(AppError::store_read(
                dir,
                AppError::Io {
                    path: dir.to_path_buf(),
                    source: e,
                },
            ))
        }
    };

    if !metadata.is_dir() {
        return Err(AppError::store_read(
            dir,
            AppError::Io {
                path: dir.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
            },
        ));
    }

    read_pairs(dir, logger).map_err(|e| AppError::store_read(dir, e))
}

/// Same as [`read_store`], but a read failure is reported through `logger`
/// and yields an empty store so the caller can still produce a report.
pub fn load_store_or_empty(dir: &Path, logger: &Logger) -> KeyStore {
    match read_store(dir, logger) {
        Ok(store) => {
            logger.debug(
                &format!("Read {} key pair(s) from {}", store.len(), dir.display()),
                Some("🔑"),
            );
            store
        }
        Err(e) => {
            logger.error(&e.to_string(), None);
            logger.warn(
                &format!("Continuing without keys from {}", dir.display()),
                None,
            );
            KeyStore::new()
        }
    }
}

fn read_pairs(dir: &Path, logger: &Logger) -> Result<KeyStore, AppError> {
    let io_error = |e: io::Error| AppError::Io {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && !is_hidden(&path) {
            paths.push(path);
        }
    }
    // Sorted so a duplicate serial is always reported against the same file.
    paths.sort();

    let mut store = KeyStore::new();
    for path in &paths {
        let Some(stem) = public_key_stem(path) else {
            logger.debug(&format!("Skipping {}", path.display()), None);
            continue;
        };
        let have_private_key = private_key_path(dir, stem).is_file();
        store.insert(certificate::load_key_pair(path, have_private_key)?)?;
    }
    Ok(store)
}
