//! Search enumerations

use bitflags::bitflags;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

/// Kind of resource a search request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum EntityType {
    Event,
    Message,
    DriveItem,
    ExternalItem,
    Site,
    List,
    ListItem,
    Drive,
    UnknownFutureValue,
    ChatMessage,
    Person,
    Acronym,
    Bookmark,
}

/// Bucket ordering for an aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display)]
#[strum(serialize_all = "camelCase")]
pub enum BucketAggregationSortProperty {
    Count,
    KeyAsString,
    KeyAsNumber,
    UnknownFutureValue,
}

bitflags! {
    /// Which SharePoint and OneDrive content a search covers.
    ///
    /// Written on the wire as a comma-separated list of member names.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SearchContent: u8 {
        const SHARED_CONTENT = 0x01;
        const PRIVATE_CONTENT = 0x02;
        const UNKNOWN_FUTURE_VALUE = 0x04;
    }
}

const SEARCH_CONTENT_NAMES: [(SearchContent, &str); 3] = [
    (SearchContent::SHARED_CONTENT, "sharedContent"),
    (SearchContent::PRIVATE_CONTENT, "privateContent"),
    (SearchContent::UNKNOWN_FUTURE_VALUE, "unknownFutureValue"),
];

impl fmt::Display for SearchContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = SEARCH_CONTENT_NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&names.join(","))
    }
}

impl FromStr for SearchContent {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = SearchContent::empty();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (flag, _) = SEARCH_CONTENT_NAMES
                .iter()
                .find(|(_, name)| *name == part)
                .ok_or(strum::ParseError::VariantNotFound)?;
            flags |= *flag;
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_entity_type_names_round_trip() {
        for entity_type in EntityType::iter() {
            let name = entity_type.to_string();
            assert_eq!(name.parse::<EntityType>().unwrap(), entity_type);
        }
        assert_eq!(EntityType::DriveItem.to_string(), "driveItem");
        assert!("Message".parse::<EntityType>().is_err());
    }

    #[test]
    fn test_search_content_flags() {
        let both: SearchContent = "sharedContent,privateContent".parse().unwrap();
        assert_eq!(both, SearchContent::SHARED_CONTENT | SearchContent::PRIVATE_CONTENT);
        assert_eq!(both.to_string(), "sharedContent,privateContent");
        assert!("sharedContent,everything".parse::<SearchContent>().is_err());
    }
}
