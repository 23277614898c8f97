use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::errors::AppResult;
use crate::guide::{merge, render_xmltv, resolve_records};
use crate::models::ChannelDirectory;
use crate::repositories::ChannelRepository;

/// Generator that merges store records with the channel directory and renders XMLTV
pub struct GuideGenerator<R> {
    /// Record store queried for channel metadata
    repository: R,
}

/// Statistics about guide generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideStatistics {
    pub channels_requested: usize,
    pub records_fetched: usize,
    pub channels: usize,
    pub programmes_total: usize,
    pub programmes_emitted: usize,
    pub programmes_skipped: usize,
    pub generation_time_ms: u64,
}

impl<R: ChannelRepository> GuideGenerator<R> {
    /// Create a new guide generator
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Build the XMLTV document for every channel in the directory
    pub async fn generate(
        &self,
        directory: &ChannelDirectory,
    ) -> AppResult<(String, GuideStatistics)> {
        let start_time = Instant::now();

        let records = resolve_records(&self.repository, directory).await?;
        let records_fetched = records.len();

        let merged = merge(records, directory)?;
        let rendered = render_xmltv(&merged.channels, merged.programmes.iter().copied());

        let statistics = GuideStatistics {
            channels_requested: directory.len(),
            records_fetched,
            channels: merged.channels.len(),
            programmes_total: merged.programmes.len(),
            programmes_emitted: rendered.programmes_emitted,
            programmes_skipped: rendered.programmes_skipped,
            generation_time_ms: start_time.elapsed().as_millis() as u64,
        };

        if statistics.programmes_skipped > 0 {
            warn!(
                "Skipped {} programmes without a usable start and stop time",
                statistics.programmes_skipped
            );
        }

        Ok((rendered.content, statistics))
    }

    /// Generate the guide and write it to `output`
    pub async fn generate_to_file(
        &self,
        directory: &ChannelDirectory,
        output: &Path,
    ) -> AppResult<GuideStatistics> {
        info!("Generating {}...", output.display());

        let (content, statistics) = self.generate(directory).await?;
        write_guide(output, &content).await?;

        info!(
            "Guide written to {}: {} channels, {} programmes, {}ms",
            output.display(),
            statistics.channels,
            statistics.programmes_emitted,
            statistics.generation_time_ms
        );
        Ok(statistics)
    }
}

/// Write the document through a temporary sibling and rename it into place
pub async fn write_guide(path: &Path, content: &str) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let temp_path = temp_sibling(path);
    if let Err(e) = tokio::fs::write(&temp_path, content).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }
    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "guide.xml".into());
    name.push(".tmp");
    path.with_file_name(name)
}
