use enumset::{EnumSet, EnumSetType};

use crate::api::open_weather::Alert;

/// Alert tags that warrant conserving every bit of stored energy.
#[derive(Debug, EnumSetType)]
pub enum SevereTag {
    Flood,
    Storm,
    CoastalEvent,
}

impl SevereTag {
    /// Match a raw provider tag against the severe vocabulary.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Flood" => Some(Self::Flood),
            "Storm" => Some(Self::Storm),
            "Coastal event" => Some(Self::CoastalEvent),
            _ => None,
        }
    }
}

/// The severe tags carried by a single alert.
#[must_use]
pub fn severe_tags(alert: &Alert) -> EnumSet<SevereTag> {
    alert.tags.iter().filter_map(|tag| SevereTag::from_tag(tag)).collect()
}

/// `true` when any alert carries a severe tag: the battery must conserve energy
/// for the entire run.
#[must_use]
pub fn classify(alerts: &[Alert]) -> bool {
    alerts.iter().any(|alert| !severe_tags(alert).is_empty())
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::*;

    fn alert(tags: &[&str]) -> Alert {
        Alert {
            event: "Test Event".to_string(),
            sender_name: "NWS".to_string(),
            description: String::new(),
            tags: tags.iter().map(ToString::to_string).collect(),
            start: Local::now(),
            end: Local::now(),
        }
    }

    #[test]
    fn test_flood_is_severe() {
        assert!(classify(&[alert(&["Flood"])]));
    }

    #[test]
    fn test_heat_is_not_severe() {
        assert!(!classify(&[alert(&["Heat"])]));
    }

    #[test]
    fn test_mixed_tags_are_severe() {
        assert!(classify(&[alert(&["Heat"]), alert(&["Wind", "Coastal event"])]));
    }

    #[test]
    fn test_no_alerts() {
        assert!(!classify(&[]));
    }

    #[test]
    fn test_severe_tags_are_collected() {
        let tags = severe_tags(&alert(&["Storm", "Flood", "Heat"]));
        assert_eq!(tags, SevereTag::Storm | SevereTag::Flood);
    }
}
