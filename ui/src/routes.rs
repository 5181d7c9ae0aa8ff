//! The closed set of pages the site can show

use leptos::prelude::*;

/// Top-level page, one per history path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Login,
}

impl Page {
    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Login => "/login",
        }
    }

    /// Page for a location path; trailing slashes are ignored
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Page::Home),
            "/login" => Some(Page::Login),
            _ => None,
        }
    }
}

/// Follow a location change into the page signal.
///
/// Unknown paths clear it (the 404 view). Returns true when the page changed.
pub fn follow_location(current: RwSignal<Option<Page>>, path: &str) -> bool {
    let next = Page::from_path(path);
    if current.get_untracked() == next {
        return false;
    }
    current.set(next);
    true
}
