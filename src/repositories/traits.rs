//! Repository trait definitions

use async_trait::async_trait;
use indexmap::IndexSet;

use crate::errors::RepositoryResult;
use crate::models::ScheduleRecord;

/// Read access to channel records
#[async_trait]
pub trait ChannelRepository: Send + Sync {
    /// Find every record whose `xmltv_id` is in `xmltv_ids`
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ScheduleRecord>)` - Matching records in store order (may be empty)
    /// * `Err(RepositoryError)` - Store unreachable or returned malformed data
    async fn find_by_xmltv_ids(
        &self,
        xmltv_ids: &IndexSet<String>,
    ) -> RepositoryResult<Vec<ScheduleRecord>>;
}
