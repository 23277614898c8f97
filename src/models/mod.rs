use serde::{Deserialize, Serialize};

pub mod channel;
pub mod directory;

pub use directory::ChannelDirectory;

/// One row from the channel record store
///
/// Several rows may share an `xmltv_id`; each carries an alternate
/// display name and possibly a logo for the same logical channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    pub xmltv_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
}

/// A `{lang, value}` pair used for titles, descriptions and categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// One broadcast instance as stored in the prepared programmes file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgrammeEntry {
    #[serde(default)]
    pub channel: Option<String>,
    /// Source site the programme was grabbed from, e.g. `tv.example.com`
    #[serde(default)]
    pub site: Option<String>,
    /// Unix epoch seconds
    #[serde(default, deserialize_with = "epoch::deserialize")]
    pub start: Option<i64>,
    /// Unix epoch seconds
    #[serde(default, deserialize_with = "epoch::deserialize")]
    pub stop: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: Vec<LocalizedText>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: Vec<LocalizedText>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<LocalizedText>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icons: Vec<String>,
}

impl ProgrammeEntry {
    /// Start and stop, if both are present
    ///
    /// A zero timestamp counts as absent.
    pub fn timing(&self) -> Option<(i64, i64)> {
        let start = self.start.filter(|s| *s != 0)?;
        let stop = self.stop.filter(|s| *s != 0)?;
        Some((start, stop))
    }
}

/// Deduplicated, merged representation of all records sharing one identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalChannel {
    pub id: String,
    pub display_names: Vec<String>,
    pub logo: Option<String>,
    pub country: Option<String>,
    pub site: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

mod epoch {
    use serde::{de::Error, Deserialize, Deserializer};

    /// Accepts integer or fractional epoch seconds; fractions are floored
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if let Some(secs) = number.as_i64() {
            return Ok(Some(secs));
        }
        match number.as_f64() {
            Some(secs) if secs.is_finite() && secs.abs() < i64::MAX as f64 => {
                Ok(Some(secs.floor() as i64))
            }
            _ => Err(D::Error::custom(format!("epoch seconds out of range: {number}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programme_entry_from_json() {
        let entry: ProgrammeEntry = serde_json::from_str(
            r#"{
                "site": "tv.example.com",
                "channel": "One.us",
                "start": 1700000000,
                "stop": 1700003600.75,
                "title": [{"lang": "en", "value": "News"}],
                "description": null,
                "icons": ["https://img.example.com/a.png"],
                "season": 3
            }"#,
        )
        .unwrap();

        assert_eq!(entry.site.as_deref(), Some("tv.example.com"));
        assert_eq!(entry.start, Some(1_700_000_000));
        assert_eq!(entry.stop, Some(1_700_003_600));
        assert_eq!(entry.title[0].value.as_deref(), Some("News"));
        assert!(entry.description.is_empty());
        assert!(entry.categories.is_empty());
        assert_eq!(entry.icons.len(), 1);
    }

    #[test]
    fn test_timing_requires_both_ends() {
        let mut entry = ProgrammeEntry {
            start: Some(10),
            stop: Some(20),
            ..Default::default()
        };
        assert_eq!(entry.timing(), Some((10, 20)));

        entry.stop = None;
        assert_eq!(entry.timing(), None);

        entry.stop = Some(0);
        assert_eq!(entry.timing(), None);
    }

    #[test]
    fn test_schedule_record_ignores_store_fields() {
        let record: ScheduleRecord = serde_json::from_str(
            r#"{"_id":"a1","xmltv_id":"One.us","name":"One","logo":null,"site":"x.com"}"#,
        )
        .unwrap();
        assert_eq!(record.xmltv_id, "One.us");
        assert_eq!(record.logo, None);
    }

    #[test]
    fn test_schedule_record_null_name_is_empty() {
        let record: ScheduleRecord =
            serde_json::from_str(r#"{"xmltv_id":"One.us","name":null,"logo":"x.png"}"#).unwrap();
        assert_eq!(record.name, "");

        let record: ScheduleRecord = serde_json::from_str(r#"{"xmltv_id":"Two.us"}"#).unwrap();
        assert_eq!(record.name, "");
    }
}
