//! Canonical channel helpers

use crate::models::CanonicalChannel;

impl CanonicalChannel {
    /// Country code taken from the second dot-delimited segment of an identifier
    ///
    /// `"abc.us.example"` yields `Some("US")`; `"abc"` yields `None`.
    pub fn country_from_id(id: &str) -> Option<String> {
        id.split('.')
            .nth(1)
            .filter(|segment| !segment.is_empty())
            .map(str::to_uppercase)
    }

    /// Logo URL, when one is set and non-empty
    pub fn logo_url(&self) -> Option<&str> {
        self.logo.as_deref().filter(|logo| !logo.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc.us.example", Some("US"))]
    #[case("BBCOne.uk", Some("UK"))]
    #[case("abc", None)]
    #[case("abc..x", None)]
    fn test_country_from_id(#[case] id: &str, #[case] expected: Option<&str>) {
        assert_eq!(
            CanonicalChannel::country_from_id(id).as_deref(),
            expected
        );
    }
}
