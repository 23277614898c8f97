//! Merge engine: store records to canonical channels, directory to programmes

use indexmap::IndexMap;
use std::cmp::Ordering;
use tracing::debug;

use crate::errors::{AppError, AppResult};
use crate::models::{CanonicalChannel, ChannelDirectory, ProgrammeEntry, ScheduleRecord};

/// Channel metadata accumulated from every record sharing an identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelIdentity {
    pub id: String,
    pub display_names: Vec<String>,
    pub logo: Option<String>,
    pub country: Option<String>,
}

impl ChannelIdentity {
    fn from_record(record: &ScheduleRecord) -> Self {
        Self {
            id: record.xmltv_id.clone(),
            display_names: vec![record.name.clone()],
            logo: non_empty(record.logo.as_deref()),
            country: CanonicalChannel::country_from_id(&record.xmltv_id),
        }
    }

    fn absorb(&mut self, record: &ScheduleRecord) {
        if self.logo.is_none() {
            if let Some(logo) = non_empty(record.logo.as_deref()) {
                debug!("Channel '{}' takes logo from '{}'", self.id, record.name);
                self.logo = Some(logo);
            }
        }
        if !self.display_names.contains(&record.name) {
            self.display_names.push(record.name.clone());
        }
    }
}

/// Channels and programmes ready for serialization
#[derive(Debug, Clone, PartialEq)]
pub struct MergedGuide<'a> {
    pub channels: Vec<CanonicalChannel>,
    pub programmes: Vec<&'a ProgrammeEntry>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Plain string ordering on UTF-16 code units
fn compare_names(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

/// Stable sort by display name; ties keep store order
pub fn sort_records(records: &mut [ScheduleRecord]) {
    records.sort_by(|a, b| compare_names(&a.name, &b.name));
}

/// Fold name-sorted records into one identity per identifier
///
/// The first record seen for an identifier fixes its position. Later
/// records add unseen names and supply a logo only while none is set.
pub fn fold_records(sorted: &[ScheduleRecord]) -> Vec<ChannelIdentity> {
    let mut channels: IndexMap<&str, ChannelIdentity> = IndexMap::new();
    for record in sorted {
        match channels.get_mut(record.xmltv_id.as_str()) {
            Some(identity) => identity.absorb(record),
            None => {
                channels.insert(&record.xmltv_id, ChannelIdentity::from_record(record));
            }
        }
    }
    channels.into_values().collect()
}

/// Attach each channel's site from the first association in the directory
pub fn resolve_sites(
    identities: Vec<ChannelIdentity>,
    directory: &ChannelDirectory,
) -> AppResult<Vec<CanonicalChannel>> {
    identities
        .into_iter()
        .map(|identity| -> AppResult<CanonicalChannel> {
            let site = directory.first_site(&identity.id).ok_or_else(|| {
                AppError::configuration(format!(
                    "channel '{}' has no site association",
                    identity.id
                ))
            })?;
            Ok(CanonicalChannel {
                site: format!("https://{site}"),
                id: identity.id,
                display_names: identity.display_names,
                logo: identity.logo,
                country: identity.country,
            })
        })
        .collect()
}

/// Concatenate every channel's programmes in directory order
pub fn flatten_programmes(directory: &ChannelDirectory) -> Vec<&ProgrammeEntry> {
    directory
        .programmes_by_channel()
        .flat_map(|(_, programmes)| programmes.iter())
        .collect()
}

/// Run the whole merge stage
pub fn merge(
    mut records: Vec<ScheduleRecord>,
    directory: &ChannelDirectory,
) -> AppResult<MergedGuide<'_>> {
    sort_records(&mut records);
    let identities = fold_records(&records);
    debug!(
        "Merged {} records into {} channels",
        records.len(),
        identities.len()
    );

    Ok(MergedGuide {
        channels: resolve_sites(identities, directory)?,
        programmes: flatten_programmes(directory),
    })
}
