/**
 * Shared Types Module
 *
 * App view states. Each view corresponds to one route of the catalog.
 */

use std::fmt;

/// Current app view/mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AppView {
    /// `/` - the movie list
    #[default]
    MovieList,
    /// `/movie/add` - admin-only create form
    AddMovie,
    /// `/login`
    Login,
    /// `/signup`
    Signup,
}

impl AppView {
    /// Route path this view stands for
    pub fn path(&self) -> &'static str {
        match self {
            AppView::MovieList => "/",
            AppView::AddMovie => "/movie/add",
            AppView::Login => "/login",
            AppView::Signup => "/signup",
        }
    }

    /// Gated views redirect non-admins to the list
    pub fn requires_admin(&self) -> bool {
        matches!(self, AppView::AddMovie)
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
