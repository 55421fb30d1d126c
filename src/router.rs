//! Screen selection.
//!
//! A five-state machine with no terminal state. Any screen can reach any
//! other through [`ViewRouter::navigate`]. Switching screens never touches
//! the stores or an in-flight scan.

use std::fmt;
use std::str::FromStr;

use crate::error::PreconditionViolation;

/// Which screen is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewState {
    #[default]
    Dashboard,
    Scanner,
    Leaderboard,
    History,
    RecyclingCenters,
}

impl ViewState {
    pub const ALL: [ViewState; 5] = [
        ViewState::Dashboard,
        ViewState::Scanner,
        ViewState::Leaderboard,
        ViewState::History,
        ViewState::RecyclingCenters,
    ];

    /// Stable identifier, e.g. for logs.
    pub fn slug(&self) -> &'static str {
        match self {
            ViewState::Dashboard => "dashboard",
            ViewState::Scanner => "scanner",
            ViewState::Leaderboard => "leaderboard",
            ViewState::History => "history",
            ViewState::RecyclingCenters => "recycling-centers",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Dashboard => "Your Impact",
            ViewState::Scanner => "Upload & Scan an Item",
            ViewState::Leaderboard => "Leaderboard",
            ViewState::History => "Your History",
            ViewState::RecyclingCenters => "Recycling Centers",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ViewState {
    type Err = PreconditionViolation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewState::ALL
            .into_iter()
            .find(|v| v.slug() == s)
            .ok_or_else(|| PreconditionViolation::UnknownView(s.to_string()))
    }
}

/// Owns the active [`ViewState`].
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    current: ViewState,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ViewState {
        self.current
    }

    pub fn is_home(&self) -> bool {
        self.current == ViewState::Dashboard
    }

    /// Switch to `target`. Returns the view that was active before.
    pub fn navigate(&mut self, target: ViewState) -> ViewState {
        let previous = self.current;
        if previous != target {
            tracing::debug!(from = %previous, to = %target, "navigate");
        }
        self.current = target;
        previous
    }

    /// Switch by slug. Unknown slugs leave the router untouched.
    pub fn navigate_to(&mut self, slug: &str) -> Result<ViewState, PreconditionViolation> {
        let target = slug.parse()?;
        self.navigate(target);
        Ok(target)
    }

    /// Return to the Dashboard.
    pub fn navigate_home(&mut self) -> ViewState {
        self.navigate(ViewState::Dashboard)
    }
}
