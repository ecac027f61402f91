//! Category tags selecting a record generator and column schema.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Domain category of a drill-down.
///
/// The set of known categories is closed, but callers may pass any tag;
/// unknown tags are carried as [`Category::Other`] and degrade to an empty
/// dataset with the generic column schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Contracts,
    Matters,
    Tasks,
    Risks,
    Compliance,
    /// Any tag without a registered generator
    Other(String),
}

static KNOWN: [Category; 5] = [
    Category::Contracts,
    Category::Matters,
    Category::Tasks,
    Category::Risks,
    Category::Compliance,
];

impl Category {
    /// Parse a category tag. Total: unrecognized tags become `Other`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "contracts" => Self::Contracts,
            "matters" => Self::Matters,
            "tasks" => Self::Tasks,
            "risks" => Self::Risks,
            "compliance" => Self::Compliance,
            other => Self::Other(other.to_string()),
        }
    }

    /// The wire tag for this category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Contracts => "contracts",
            Self::Matters => "matters",
            Self::Tasks => "tasks",
            Self::Risks => "risks",
            Self::Compliance => "compliance",
            Self::Other(tag) => tag,
        }
    }

    /// Whether this category has a registered generator and schema.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// All known categories, in dashboard order.
    #[must_use]
    pub fn known() -> &'static [Self] {
        &KNOWN
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_tag(s))
    }
}

impl From<&str> for Category {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for Category {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_roundtrip() {
        for category in Category::known() {
            assert_eq!(&Category::from_tag(category.as_str()), category);
            assert!(category.is_known());
        }
    }

    #[test]
    fn test_unknown_tag_is_preserved() {
        let category = Category::from_tag("not-a-real-category");
        assert_eq!(category, Category::Other("not-a-real-category".to_string()));
        assert_eq!(category.as_str(), "not-a-real-category");
        assert!(!category.is_known());
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!(!Category::from_tag("Contracts").is_known());
    }

    #[test]
    fn test_serde_uses_plain_tag() {
        let json = serde_json::to_string(&Category::Risks).unwrap();
        assert_eq!(json, "\"risks\"");
        let back: Category = serde_json::from_str("\"disputes\"").unwrap();
        assert_eq!(back, Category::Other("disputes".to_string()));
    }
}
