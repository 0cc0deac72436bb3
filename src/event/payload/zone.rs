//! Zone change payload.

use serde::{Serialize, Serializer};

/// Kind of zone change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ZoneChangeType {
    Countered,
    Damage,
    Destroy,
    Discard,
    Exile,
    LegendRule,
    Sacrifice,
    ZeroLoyalty,
    ZeroToughness,
    /// A type outside the known set, kept verbatim.
    Other(String),
}

impl ZoneChangeType {
    /// Map a logged type name onto the known set.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "Countered" => Self::Countered,
            "Damage" => Self::Damage,
            "Destroy" => Self::Destroy,
            "Discard" => Self::Discard,
            "Exile" => Self::Exile,
            "LegendRule" => Self::LegendRule,
            "Sacrifice" => Self::Sacrifice,
            "ZeroLoyalty" => Self::ZeroLoyalty,
            "ZeroToughness" => Self::ZeroToughness,
            other => Self::Other(other.to_string()),
        }
    }

    /// The type name as logged.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Countered => "Countered",
            Self::Damage => "Damage",
            Self::Destroy => "Destroy",
            Self::Discard => "Discard",
            Self::Exile => "Exile",
            Self::LegendRule => "LegendRule",
            Self::Sacrifice => "Sacrifice",
            Self::ZeroLoyalty => "ZeroLoyalty",
            Self::ZeroToughness => "ZeroToughness",
            Self::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ZoneChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ZoneChangeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A card moving zones, with the card that caused it.
///
/// A `[NULL]` target is reported as the name `NULL` with `grp_id` 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneChange {
    #[serde(rename = "type")]
    pub kind: ZoneChangeType,
    pub target: String,
    pub instance_id: u64,
    pub grp_id: u64,
    pub instigator: u64,
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_kept_verbatim() {
        let kind = ZoneChangeType::from_name("Conjure");
        assert_eq!(kind, ZoneChangeType::Other("Conjure".to_string()));
        assert_eq!(kind.to_string(), "Conjure");
    }

    #[test]
    fn test_type_serializes_as_name() {
        let json = serde_json::to_string(&ZoneChangeType::ZeroToughness).unwrap();
        assert_eq!(json, r#""ZeroToughness""#);
    }
}
