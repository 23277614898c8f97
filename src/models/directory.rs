//! Channel directory loaded from the prepared programmes file
//!
//! The file maps each channel identifier to its programme entries; every
//! entry names the site it was grabbed from, which doubles as the
//! channel-to-site association table. Key order is preserved.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::ProgrammeEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChannelDirectory {
    channels: IndexMap<String, Vec<ProgrammeEntry>>,
}

impl<'de> Deserialize<'de> for ChannelDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // null entries are tolerated and dropped
        let raw = IndexMap::<String, Option<Vec<Option<ProgrammeEntry>>>>::deserialize(deserializer)?;
        let channels = raw
            .into_iter()
            .map(|(id, entries)| {
                let entries: Vec<ProgrammeEntry> =
                    entries.unwrap_or_default().into_iter().flatten().collect();
                (id, entries)
            })
            .collect();
        Ok(Self { channels })
    }
}

impl ChannelDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a channel's programme list, keeping first-insertion key order
    pub fn insert(&mut self, xmltv_id: impl Into<String>, programmes: Vec<ProgrammeEntry>) {
        self.channels.insert(xmltv_id.into(), programmes);
    }

    /// Channel identifiers in file order
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.channels.keys().map(String::as_str)
    }

    /// Site of the first association for a channel
    pub fn first_site(&self, xmltv_id: &str) -> Option<&str> {
        self.channels
            .get(xmltv_id)?
            .first()?
            .site
            .as_deref()
            .filter(|site| !site.is_empty())
    }

    /// Per-channel programme lists in file order
    pub fn programmes_by_channel(&self) -> impl Iterator<Item = (&str, &[ProgrammeEntry])> {
        self.channels
            .iter()
            .map(|(id, programmes)| (id.as_str(), programmes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}
