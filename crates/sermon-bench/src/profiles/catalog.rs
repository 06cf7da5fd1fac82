use super::domain::{PreacherProfile, PreachingCategory, ProfileId};
use super::parser::parse_profiles;
use super::seed::standard_profiles;
use super::CatalogError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Category side of a catalog filter: the `"all"` sentinel or one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(PreachingCategory),
}

impl CategoryFilter {
    pub const ALL_SENTINEL: &'static str = "all";

    /// Options offered in the profile selection sidebar.
    pub const fn sidebar_options() -> [Self; 5] {
        [
            Self::All,
            Self::Only(PreachingCategory::Expository),
            Self::Only(PreachingCategory::Narrative),
            Self::Only(PreachingCategory::Topical),
            Self::Only(PreachingCategory::Evangelistic),
        ]
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::All => Self::ALL_SENTINEL,
            Self::Only(category) => category.tag(),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Profiles",
            Self::Only(category) => category.label(),
        }
    }

    pub fn admits(self, profile: &PreacherProfile) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => profile.has_category(category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = super::domain::UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(Self::ALL_SENTINEL) {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Result of `ProfileCatalog::filter`, borrowing from the catalog.
#[derive(Debug, Clone)]
pub struct ProfileMatches<'a> {
    profiles: Vec<&'a PreacherProfile>,
    filtered: bool,
}

impl<'a> ProfileMatches<'a> {
    pub fn profiles(&self) -> &[&'a PreacherProfile] {
        &self.profiles
    }

    pub fn into_profiles(self) -> Vec<&'a PreacherProfile> {
        self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// True when a query or a category narrowed the catalog.
    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    pub fn ids(&self) -> Vec<&'a ProfileId> {
        self.profiles.iter().map(|profile| &profile.id).collect()
    }
}

/// In-memory, read-only set of benchmark profiles.
#[derive(Debug, Clone)]
pub struct ProfileCatalog {
    profiles: Vec<PreacherProfile>,
}

impl ProfileCatalog {
    pub fn new(profiles: Vec<PreacherProfile>) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if !seen.insert(profile.id.clone()) {
                return Err(CatalogError::DuplicateId(profile.id.clone()));
            }
            if profile.categories.is_empty() {
                return Err(CatalogError::MissingCategories(profile.id.clone()));
            }
        }

        Ok(Self { profiles })
    }

    /// Built-in seed catalog.
    pub fn standard() -> Self {
        Self {
            profiles: standard_profiles(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(parse_profiles(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PreacherProfile> {
        self.profiles.iter()
    }

    pub fn get(&self, id: &ProfileId) -> Option<&PreacherProfile> {
        self.profiles.iter().find(|profile| &profile.id == id)
    }

    /// The first catalog entry, used whenever a profile id is absent or unknown.
    pub fn default_profile(&self) -> &PreacherProfile {
        &self.profiles[0]
    }

    pub fn resolve(&self, id: Option<&ProfileId>) -> &PreacherProfile {
        id.and_then(|id| self.get(id))
            .unwrap_or_else(|| self.default_profile())
    }

    pub fn filter(&self, query: &str, category: &CategoryFilter) -> ProfileMatches<'_> {
        let filtered = !query.is_empty() || *category != CategoryFilter::All;
        let profiles = self
            .profiles
            .iter()
            .filter(|profile| profile.matches_text(query) && category.admits(profile))
            .collect();

        ProfileMatches { profiles, filtered }
    }
}

impl Default for ProfileCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::domain::PreachingEra;
    use std::collections::BTreeSet;

    fn profile(id: &str, categories: &[PreachingCategory]) -> PreacherProfile {
        PreacherProfile {
            id: ProfileId::new(id),
            name: id.to_string(),
            description: "desc".to_string(),
            categories: categories.iter().copied().collect::<BTreeSet<_>>(),
            strengths: Vec::new(),
            era: PreachingEra::Contemporary,
            image_url: String::new(),
        }
    }

    #[test]
    fn rejects_empty_and_duplicate_catalogs() {
        assert!(matches!(
            ProfileCatalog::new(Vec::new()),
            Err(CatalogError::Empty)
        ));

        let dup = vec![
            profile("a", &[PreachingCategory::Topical]),
            profile("a", &[PreachingCategory::Narrative]),
        ];
        assert!(matches!(
            ProfileCatalog::new(dup),
            Err(CatalogError::DuplicateId(id)) if id.as_str() == "a"
        ));

        let bare = vec![profile("b", &[])];
        assert!(matches!(
            ProfileCatalog::new(bare),
            Err(CatalogError::MissingCategories(_))
        ));
    }

    #[test]
    fn standard_catalog_is_valid() {
        let standard = ProfileCatalog::standard();
        let rebuilt = ProfileCatalog::new(standard.iter().cloned().collect())
            .expect("seed catalog satisfies invariants");
        assert_eq!(rebuilt.len(), standard.len());
    }

    #[test]
    fn resolve_falls_back_to_first_profile() {
        let catalog = ProfileCatalog::standard();
        let first = catalog.default_profile().id.clone();
        assert_eq!(catalog.resolve(None).id, first);
        assert_eq!(catalog.resolve(Some(&ProfileId::new("nobody"))).id, first);
        let keller = ProfileId::new("tim-keller");
        assert_eq!(catalog.resolve(Some(&keller)).id, keller);
    }

    #[test]
    fn category_filter_parses_sentinel() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "topical".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(PreachingCategory::Topical))
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn unfiltered_matches_report_no_filter() {
        let catalog = ProfileCatalog::standard();
        let matches = catalog.filter("", &CategoryFilter::All);
        assert!(!matches.is_filtered());
        assert_eq!(matches.len(), catalog.len());

        let none = catalog.filter("zzzz-no-match", &CategoryFilter::All);
        assert!(none.is_filtered());
        assert!(none.is_empty());
    }
}
