//! Prepared programmes file loader
//!
//! The file is a JSON object mapping channel identifier to an ordered
//! array of programme entries, each naming the site it came from. It is
//! read once at startup; a missing file or invalid JSON aborts the run.

use std::path::Path;
use tracing::info;

use crate::errors::{SourceError, SourceResult};
use crate::models::ChannelDirectory;

const SOURCE_TYPE: &str = "programs.json";

/// Parse the programmes file contents
pub fn parse_channel_directory(contents: &str) -> SourceResult<ChannelDirectory> {
    serde_json::from_str(contents).map_err(|e| SourceError::parse_error(SOURCE_TYPE, e.to_string()))
}

/// Read and parse the programmes file at `path`
pub async fn load_channel_directory(path: &Path) -> SourceResult<ChannelDirectory> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(SourceError::NotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let directory = parse_channel_directory(&contents)?;
    info!(
        "Loaded {} channels from {}",
        directory.len(),
        path.display()
    );
    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_channel_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("programs.json");
        tokio::fs::write(&path, r#"{"One.us":[{"site":"one.com","start":1,"stop":2}]}"#)
            .await
            .unwrap();

        let directory = load_channel_directory(&path).await.unwrap();
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.first_site("One.us"), Some("one.com"));
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = load_channel_directory(&dir.path().join("programs.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_channel_directory("{\"One.us\": [").unwrap_err();
        assert!(matches!(err, SourceError::ParseError { .. }));

        let err = parse_channel_directory("[1, 2]").unwrap_err();
        assert!(matches!(err, SourceError::ParseError { .. }));
    }
}
