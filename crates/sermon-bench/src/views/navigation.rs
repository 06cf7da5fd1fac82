use crate::profiles::ProfileId;
use crate::submission::SermonFormData;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Client-side routes of the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Route {
    Home,
    Dashboard,
    Profiles,
    CreateProfile,
    ImprovementPlan,
    Resources,
    Submit,
    Results { id: String },
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim().trim_matches('/');
        let route = match trimmed {
            "" => Self::Home,
            "dashboard" => Self::Dashboard,
            "profiles" => Self::Profiles,
            "create-profile" => Self::CreateProfile,
            "improvement-plan" => Self::ImprovementPlan,
            "resources" => Self::Resources,
            "submit" => Self::Submit,
            other => {
                let id = other.strip_prefix("results/")?;
                if id.is_empty() || id.contains('/') {
                    return None;
                }
                Self::Results { id: id.to_string() }
            }
        };
        Some(route)
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Dashboard => "/dashboard".to_string(),
            Self::Profiles => "/profiles".to_string(),
            Self::CreateProfile => "/create-profile".to_string(),
            Self::ImprovementPlan => "/improvement-plan".to_string(),
            Self::Resources => "/resources".to_string(),
            Self::Submit => "/submit".to_string(),
            Self::Results { id } => format!("/results/{id}"),
        }
    }

    /// Improvement plan and resources have no page of their own yet.
    pub fn renders_dashboard(&self) -> bool {
        matches!(self, Self::Dashboard | Self::ImprovementPlan | Self::Resources)
    }

    /// Primary navigation links in display order.
    pub fn nav_links() -> [(&'static str, Route); 5] {
        [
            ("Home", Self::Home),
            ("Dashboard", Self::Dashboard),
            ("Profiles", Self::Profiles),
            ("Submit Sermon", Self::Submit),
            ("Create Profile", Self::CreateProfile),
        ]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Payload the results page expects. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sermon_data: Option<SermonFormData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_id: Option<ProfileId>,
}

/// In-memory state handed from one view to the next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavigationState {
    Submit {
        #[serde(rename = "selectedProfileId")]
        selected_profile_id: ProfileId,
    },
    Results(ResultsState),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub route: Route,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<NavigationState>,
}

impl Navigation {
    pub fn to(route: Route) -> Self {
        Self { route, state: None }
    }

    pub fn with_state(route: Route, state: NavigationState) -> Self {
        Self {
            route,
            state: Some(state),
        }
    }

    pub fn location(&self) -> String {
        self.route.path()
    }

    pub fn results_state(&self) -> Option<&ResultsState> {
        match &self.state {
            Some(NavigationState::Results(state)) => Some(state),
            _ => None,
        }
    }

    pub fn selected_profile(&self) -> Option<&ProfileId> {
        match &self.state {
            Some(NavigationState::Submit {
                selected_profile_id,
            }) => Some(selected_profile_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_route() {
        let cases = [
            ("/", Route::Home),
            ("dashboard", Route::Dashboard),
            ("/profiles/", Route::Profiles),
            ("/create-profile", Route::CreateProfile),
            ("/improvement-plan", Route::ImprovementPlan),
            ("/resources", Route::Resources),
            ("/submit", Route::Submit),
            (
                "/results/sermon-123",
                Route::Results {
                    id: "sermon-123".to_string(),
                },
            ),
        ];
        for (path, expected) in cases {
            let parsed = Route::parse(path).expect("route parses");
            assert_eq!(parsed, expected, "path {path}");
            assert_eq!(Route::parse(&parsed.path()), Some(parsed));
        }
    }

    #[test]
    fn rejects_unknown_paths() {
        assert_eq!(Route::parse("/results/"), None);
        assert_eq!(Route::parse("/results/a/b"), None);
        assert_eq!(Route::parse("/settings"), None);
    }

    #[test]
    fn auxiliary_pages_fall_back_to_dashboard() {
        assert!(Route::ImprovementPlan.renders_dashboard());
        assert!(Route::Resources.renders_dashboard());
        assert!(!Route::Submit.renders_dashboard());
    }
}
