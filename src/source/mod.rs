//! Draft message sources.
//!
//! A commit-msg hook receives the path of the draft and rewrites it in
//! place. Without a path the message is read from stdin and the result is
//! written to stdout, which makes the binary usable as a filter.

use crate::model::error::InputError;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the draft comes from and where the result goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageSource {
    /// A message file, rewritten in place.
    File(PathBuf),
    /// Stdin in, stdout out.
    Stdio,
}

impl MessageSource {
    /// Pick the source for an optional path argument.
    pub fn detect(file: Option<PathBuf>) -> Self {
        match file {
            Some(path) => MessageSource::File(path),
            None => MessageSource::Stdio,
        }
    }

    /// Read the whole draft.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` for a missing file,
    /// `InputError::NotUtf8` for undecodable content, `InputError::Io` otherwise.
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            MessageSource::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound { path: path.clone() });
                }
                read_message(File::open(path)?)
            }
            MessageSource::Stdio => read_message(std::io::stdin().lock()),
        }
    }

    /// Write the final message.
    ///
    /// Files are replaced atomically so an interrupted hook never leaves a
    /// truncated draft behind.
    pub fn write(&self, text: &str) -> Result<(), InputError> {
        match self {
            MessageSource::File(path) => {
                atomic_write(path, text.as_bytes())?;
                info!(path = %path.display(), "rewrote commit message");
                Ok(())
            }
            MessageSource::Stdio => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

/// Read a reader to the end as UTF-8.
pub fn read_message(mut reader: impl Read) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8)
}

/// Write data to a file atomically using temp-file-then-rename.
///
/// The temp file sits next to the target so the rename stays on one
/// filesystem; it is synced before the rename. An existing target's
/// permissions carry over to the replacement. On failure the temp file is
/// removed and the target is left as it was.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<(), InputError> {
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    let result = write_and_replace(&tmp, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn write_and_replace(tmp: &Path, path: &Path, data: &[u8]) -> Result<(), InputError> {
    let mut file = File::create(tmp)?;
    file.write_all(data)?;
    file.sync_data()?;
    drop(file);

    if let Ok(metadata) = fs::metadata(path) {
        fs::set_permissions(tmp, metadata.permissions())?;
    }
    fs::rename(tmp, path)?;
    Ok(())
}
