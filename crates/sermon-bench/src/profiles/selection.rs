use super::catalog::{CategoryFilter, ProfileCatalog, ProfileMatches};
use super::domain::ProfileId;
use crate::views::{Navigation, NavigationState, Route, Transition, ViewModel};

/// State of the profile selection page: search box plus category sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileSelectionState {
    pub search_term: String,
    pub category: CategoryFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMessage {
    Search(String),
    SelectCategory(CategoryFilter),
    Choose(ProfileId),
}

impl ProfileSelectionState {
    pub fn visible<'a>(&self, catalog: &'a ProfileCatalog) -> ProfileMatches<'a> {
        catalog.filter(&self.search_term, &self.category)
    }

    pub fn empty_message(&self, catalog: &ProfileCatalog) -> Option<&'static str> {
        if self.visible(catalog).is_empty() {
            Some("No profiles match your search criteria.")
        } else {
            None
        }
    }
}

impl ViewModel for ProfileSelectionState {
    type Message = SelectionMessage;

    fn update(&self, message: Self::Message) -> Transition<Self> {
        match message {
            SelectionMessage::Search(search_term) => Transition::stay(Self {
                search_term,
                ..self.clone()
            }),
            SelectionMessage::SelectCategory(category) => Transition::stay(Self {
                category,
                ..self.clone()
            }),
            SelectionMessage::Choose(selected_profile_id) => Transition::navigate(
                self.clone(),
                Navigation::with_state(
                    Route::Submit,
                    NavigationState::Submit {
                        selected_profile_id,
                    },
                ),
            ),
        }
    }
}
