//! Framework-agnostic view plumbing: immutable view state, a unidirectional
//! `update` function, and a loop that re-renders only when state changes.

pub mod dashboard;
pub mod navigation;
pub mod results;

pub use dashboard::DashboardView;
pub use navigation::{Navigation, NavigationState, ResultsState, Route};
pub use results::ResultsView;

/// Outcome of applying one message to a view state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub state: S,
    pub navigation: Option<Navigation>,
}

impl<S> Transition<S> {
    pub fn stay(state: S) -> Self {
        Self {
            state,
            navigation: None,
        }
    }

    pub fn navigate(state: S, navigation: Navigation) -> Self {
        Self {
            state,
            navigation: Some(navigation),
        }
    }
}

/// View state owned exclusively by one page.
pub trait ViewModel: Clone + PartialEq {
    type Message;

    fn update(&self, message: Self::Message) -> Transition<Self>;
}

pub trait Renderer<S> {
    fn render(&mut self, state: &S);
}

impl<S, F> Renderer<S> for F
where
    F: FnMut(&S),
{
    fn render(&mut self, state: &S) {
        self(state)
    }
}

/// Drives a view: dispatch a message, swap in the new state, render on change.
pub struct RenderLoop<S, R> {
    state: S,
    renderer: R,
    renders: usize,
}

impl<S, R> RenderLoop<S, R>
where
    S: ViewModel,
    R: Renderer<S>,
{
    /// Renders the initial state once.
    pub fn new(state: S, mut renderer: R) -> Self {
        renderer.render(&state);
        Self {
            state,
            renderer,
            renders: 1,
        }
    }

    pub fn dispatch(&mut self, message: S::Message) -> Option<Navigation> {
        let Transition { state, navigation } = self.state.update(message);
        if state != self.state {
            self.state = state;
            self.renderer.render(&self.state);
            self.renders += 1;
        }
        navigation
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn into_state(self) -> S {
        self.state
    }
}
