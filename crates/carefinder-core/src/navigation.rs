//! Page routing for the presentation layer.
//!
//! The current page is an explicit `Router` value owned by the front end and
//! passed to whatever renders it.

/// A top-level page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Guidance,
    Questionnaire,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Page; 3] = [Page::Home, Page::Guidance, Page::Questionnaire];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Guidance => "Guidance",
            Page::Questionnaire => "Questionnaire",
        }
    }

    fn index(self) -> usize {
        match self {
            Page::Home => 0,
            Page::Guidance => 1,
            Page::Questionnaire => 2,
        }
    }
}

/// Which page is showing. Starts on `Page::Home`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    current: Page,
}

impl Router {
    pub fn new() -> Self {
        Self {
            current: Page::Home,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch to `page`. Returns true if the page changed.
    pub fn navigate(&mut self, page: Page) -> bool {
        let changed = self.current != page;
        self.current = page;
        changed
    }

    /// Move to the following page, wrapping to the first.
    pub fn next(&mut self) -> Page {
        let i = (self.current.index() + 1) % Page::ALL.len();
        self.current = Page::ALL[i];
        self.current
    }

    /// Move to the preceding page, wrapping to the last.
    pub fn previous(&mut self) -> Page {
        let len = Page::ALL.len();
        let i = (self.current.index() + len - 1) % len;
        self.current = Page::ALL[i];
        self.current
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_starts_home() {
        assert_eq!(Router::new().current(), Page::Home);
    }

    #[test]
    fn navigate_reports_change() {
        let mut router = Router::new();
        assert!(router.navigate(Page::Questionnaire));
        assert!(!router.navigate(Page::Questionnaire));
        assert_eq!(router.current(), Page::Questionnaire);
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut router = Router::new();
        assert_eq!(router.next(), Page::Guidance);
        assert_eq!(router.next(), Page::Questionnaire);
        assert_eq!(router.next(), Page::Home);

        assert_eq!(router.previous(), Page::Questionnaire);
        assert_eq!(router.previous(), Page::Guidance);
    }
}
