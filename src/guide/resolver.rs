//! Channel resolver: directory identifiers to store records

use indexmap::IndexSet;
use tracing::{debug, info};

use crate::errors::AppResult;
use crate::models::{ChannelDirectory, ScheduleRecord};
use crate::repositories::ChannelRepository;

/// Identifiers to request from the store, deduplicated, in directory order
pub fn requested_identifiers(directory: &ChannelDirectory) -> IndexSet<String> {
    directory.identifiers().map(str::to_string).collect()
}

/// Fetch every record for the directory's channels
///
/// Records come back exactly as the store returned them. Store failures
/// are fatal; nothing is retried.
pub async fn resolve_records<R>(
    repository: &R,
    directory: &ChannelDirectory,
) -> AppResult<Vec<ScheduleRecord>>
where
    R: ChannelRepository + ?Sized,
{
    let ids = requested_identifiers(directory);
    debug!("Requesting records for {} channel identifiers", ids.len());

    let records = repository.find_by_xmltv_ids(&ids).await?;
    info!(
        "Resolved {} channel records for {} identifiers",
        records.len(),
        ids.len()
    );
    Ok(records)
}
