use std::path::Path;

use super::*;
use crate::error::PlayerError;

#[test]
fn test_encode_data_uri() {
    assert_eq!(
        encode_data_uri("audio/mpeg", b"ID3"),
        "data:audio/mpeg;base64,SUQz"
    );
}

#[test]
fn test_encode_data_uri_empty_mime() {
    assert_eq!(
        encode_data_uri("", &[0, 0, 0]),
        "data:application/octet-stream;base64,AAAA"
    );
}

#[test]
fn test_decode_data_uri() {
    let (mime, bytes) = decode_data_uri("data:audio/wav;base64,UklGRg==").unwrap();
    assert_eq!(mime, "audio/wav");
    assert_eq!(bytes, b"RIFF");
}

#[test]
fn test_decode_data_uri_rejects_malformed() {
    for bad in [
        "audio/wav;base64,AAAA",
        "data:audio/wav;base64",
        "data:audio/wav,AAAA",
        "data:audio/wav;base64,@@@",
    ] {
        assert!(
            matches!(decode_data_uri(bad), Err(PlayerError::InvalidDataUri { .. })),
            "{bad} should be rejected"
        );
    }
}

#[test]
fn test_memory_file() {
    let file = MemoryFile::new("chime.ogg", "audio/ogg", vec![1, 2, 3]);

    assert_eq!(file.name(), "chime.ogg");
    assert_eq!(file.size(), 3);
    assert_eq!(file.mime_type(), "audio/ogg");
    assert!(file.path().is_none());
    assert_eq!(tokio_test::block_on(file.read_all()).unwrap(), vec![1, 2, 3]);
}

#[cfg(feature = "tokio-runtime")]
#[tokio::test]
async fn test_local_file_exposes_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("focus.mp3");
    std::fs::write(&path, b"ID3 data").unwrap();

    let file = LocalFile::open(&path).await.unwrap();

    assert_eq!(file.name(), "focus.mp3");
    assert_eq!(file.size(), 8);
    assert_eq!(file.mime_type(), "audio/mpeg");
    assert_eq!(file.path(), Some(path.as_path()));
}

#[cfg(feature = "tokio-runtime")]
#[tokio::test]
async fn test_local_file_sandboxed_hides_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.unknownext");
    std::fs::write(&path, b"abc").unwrap();

    let file = LocalFile::sandboxed(&path).await.unwrap();

    assert!(file.path().is_none());
    assert_eq!(file.mime_type(), "");
    assert_eq!(file.read_all().await.unwrap(), b"abc");
}

#[cfg(feature = "tokio-runtime")]
#[tokio::test]
async fn test_local_file_missing() {
    assert!(LocalFile::open(Path::new("/definitely/not/here.mp3")).await.is_err());
}
