use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Identifier wrapper for benchmark preacher profiles.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub String);

impl ProfileId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Preaching style tags a profile can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreachingCategory {
    Expository,
    Topical,
    Narrative,
    Evangelistic,
    Theological,
    Practical,
    Apologetic,
    Cultural,
}

impl PreachingCategory {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Expository,
            Self::Topical,
            Self::Narrative,
            Self::Evangelistic,
            Self::Theological,
            Self::Practical,
            Self::Apologetic,
            Self::Cultural,
        ]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Expository => "expository",
            Self::Topical => "topical",
            Self::Narrative => "narrative",
            Self::Evangelistic => "evangelistic",
            Self::Theological => "theological",
            Self::Practical => "practical",
            Self::Apologetic => "apologetic",
            Self::Cultural => "cultural",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Expository => "Expository",
            Self::Topical => "Topical",
            Self::Narrative => "Narrative",
            Self::Evangelistic => "Evangelistic",
            Self::Theological => "Theological",
            Self::Practical => "Practical",
            Self::Apologetic => "Apologetic",
            Self::Cultural => "Cultural",
        }
    }
}

impl FromStr for PreachingCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.tag().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(needle.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preaching category '{0}'")]
pub struct UnknownCategory(pub String);

/// Historical period a preacher belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PreachingEra {
    #[serde(rename = "Contemporary")]
    Contemporary,
    #[serde(rename = "20th Century")]
    TwentiethCentury,
    #[serde(rename = "19th Century")]
    NineteenthCentury,
    #[serde(rename = "Historical")]
    Historical,
}

impl PreachingEra {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Contemporary,
            Self::TwentiethCentury,
            Self::NineteenthCentury,
            Self::Historical,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Contemporary => "Contemporary",
            Self::TwentiethCentury => "20th Century",
            Self::NineteenthCentury => "19th Century",
            Self::Historical => "Historical",
        }
    }
}

impl FromStr for PreachingEra {
    type Err = UnknownEra;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ordered()
            .into_iter()
            .find(|era| era.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownEra(needle.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown preaching era '{0}'")]
pub struct UnknownEra(pub String);

/// Immutable catalog entry used as a comparison benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreacherProfile {
    pub id: ProfileId,
    pub name: String,
    pub description: String,
    pub categories: BTreeSet<PreachingCategory>,
    #[serde(default)]
    pub strengths: Vec<String>,
    pub era: PreachingEra,
    pub image_url: String,
}

impl PreacherProfile {
    pub fn has_category(&self, category: PreachingCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Case-insensitive substring match against name or description.
    pub fn matches_text(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    pub fn category_labels(&self) -> Vec<&'static str> {
        self.categories.iter().map(|category| category.label()).collect()
    }
}
