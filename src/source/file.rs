use std::io;
#[cfg(feature = "tokio-runtime")]
use std::path::PathBuf;
use std::path::Path;

use async_trait::async_trait;

/// A user-selected file supplied by the host
///
/// Mirrors what a browser file input provides: a name, a size, a MIME type
/// that may be empty or wrong, and optionally a direct filesystem path.
#[async_trait]
pub trait FileHandle: Send + Sync {
    /// File name including extension
    fn name(&self) -> &str;

    /// Size in bytes
    fn size(&self) -> u64;

    /// MIME type reported by the host (may be empty)
    fn mime_type(&self) -> &str;

    /// Direct filesystem path, if the host grants one
    ///
    /// When present the player references the file in place instead of
    /// copying its bytes.
    fn path(&self) -> Option<&Path> {
        None
    }

    /// Read the whole file into memory
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails
    async fn read_all(&self) -> io::Result<Vec<u8>>;
}

/// File held entirely in memory, e.g. an upload or a drag-and-drop blob
#[derive(Debug, Clone)]
pub struct MemoryFile {
    name: String,
    mime_type: String,
    data: Vec<u8>,
}

impl MemoryFile {
    /// Create a new in-memory file
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data,
        }
    }
}

#[async_trait]
impl FileHandle for MemoryFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        Ok(self.data.clone())
    }
}

/// File on the local filesystem
#[cfg(feature = "tokio-runtime")]
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    mime_type: String,
    size: u64,
    expose_path: bool,
}

#[cfg(feature = "tokio-runtime")]
impl LocalFile {
    /// Open a file whose path is handed to the player directly
    ///
    /// # Errors
    ///
    /// Returns error if the file metadata cannot be read
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::with_access(path.as_ref(), true).await
    }

    /// Open a file whose path is hidden from the player, forcing its bytes
    /// to be read and embedded
    ///
    /// # Errors
    ///
    /// Returns error if the file metadata cannot be read
    pub async fn sandboxed(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::with_access(path.as_ref(), false).await
    }

    async fn with_access(path: &Path, expose_path: bool) -> io::Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("track")
            .to_string();
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            path: path.to_path_buf(),
            name,
            mime_type,
            size: metadata.len(),
            expose_path,
        })
    }
}

#[cfg(feature = "tokio-runtime")]
#[async_trait]
impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    fn path(&self) -> Option<&Path> {
        self.expose_path.then_some(self.path.as_path())
    }

    async fn read_all(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }
}
