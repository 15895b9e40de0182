//! Previous/next links for the page being rendered.

use serde::Serialize;

use crate::navigation::NavigationEntry;

/// Neighbours of a page in the navigation list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Entry before the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<NavigationEntry>,
    /// Entry after the current page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NavigationEntry>,
}

impl Pagination {
    /// Locate `current_slug` in `nav` and take its neighbours.
    ///
    /// A page that is not in the list (the root page, usually) gets the first
    /// entry as its next link and no previous link. Placeholder neighbours
    /// have nothing to link to and come back as `None`.
    #[must_use]
    pub fn locate(nav: &[NavigationEntry], current_slug: &str) -> Self {
        let position = nav
            .iter()
            .position(|entry| entry.url.as_deref() == Some(current_slug));

        let (previous, next) = match position {
            Some(index) => (
                index.checked_sub(1).and_then(|i| nav.get(i)),
                nav.get(index + 1),
            ),
            None => (None, nav.first()),
        };

        Self {
            previous: previous.filter(|entry| !entry.is_placeholder()).cloned(),
            next: next.filter(|entry| !entry.is_placeholder()).cloned(),
        }
    }
}
