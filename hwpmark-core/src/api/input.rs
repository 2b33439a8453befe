//! Input abstraction for the converter

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::Error;

/// Raw container bytes from various sources
pub enum Input {
    /// Bytes already in memory
    Bytes(Vec<u8>),
    /// File path input
    File(PathBuf),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Bytes(bytes) => f
                .debug_struct("Input::Bytes")
                .field("length", &bytes.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from bytes
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Input::Bytes(bytes.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read all bytes, refusing inputs larger than `limit`
    pub(crate) fn into_bytes(self, limit: Option<usize>) -> Result<Vec<u8>, Error> {
        let bytes = match self {
            Input::Bytes(bytes) => bytes,
            Input::File(path) => {
                if let Some(limit) = limit {
                    let size = std::fs::metadata(&path)?.len();
                    let size = usize::try_from(size).unwrap_or(usize::MAX);
                    if size > limit {
                        return Err(Error::InputTooLarge { size, limit });
                    }
                }
                std::fs::read(&path)?
            }
            Input::Reader(reader) => {
                let mut buffer = Vec::new();
                match limit {
                    // Read one byte past the limit so oversized streams are detected
                    Some(limit) => {
                        let cap = u64::try_from(limit).unwrap_or(u64::MAX).saturating_add(1);
                        reader.take(cap).read_to_end(&mut buffer)?;
                    }
                    None => {
                        let mut reader = reader;
                        reader.read_to_end(&mut buffer)?;
                    }
                }
                buffer
            }
        };

        if let Some(limit) = limit {
            if bytes.len() > limit {
                return Err(Error::InputTooLarge {
                    size: bytes.len(),
                    limit,
                });
            }
        }

        Ok(bytes)
    }
}

impl From<Vec<u8>> for Input {
    fn from(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }
}

impl From<&[u8]> for Input {
    fn from(bytes: &[u8]) -> Self {
        Input::Bytes(bytes.to_vec())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}
