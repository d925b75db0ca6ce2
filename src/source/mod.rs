//! Inbound file handles and embedded payload encoding
//!
//! A host hands the player a `FileHandle` for each user-selected file. When
//! the handle exposes a filesystem path the player references the file in
//! place; otherwise it reads the bytes and embeds them as a base64 data URI.

mod data_uri;
mod file;
#[cfg(test)]
mod tests;

pub use data_uri::{decode_data_uri, encode_data_uri};
#[cfg(feature = "tokio-runtime")]
pub use file::LocalFile;
pub use file::{FileHandle, MemoryFile};
