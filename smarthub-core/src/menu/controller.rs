//! Menu controller
//!
//! Holds the selected page and applies navigation events to it. The page
//! index always stays in range and wraps at both ends.

use crate::input::NavigationEvent;

/// Number of status pages
pub const PAGE_COUNT: usize = 4;

/// Status page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    /// Temperature, humidity and alarm summary
    #[default]
    Overview,
    /// Distance with radar bar
    Radar,
    /// Light level with dark/bright status
    Light,
    /// Uptime, threshold and alarm status
    SystemInfo,
}

impl Page {
    /// All pages in menu order
    pub const ALL: [Page; PAGE_COUNT] = [Page::Overview, Page::Radar, Page::Light, Page::SystemInfo];

    /// Position in the menu
    pub fn index(self) -> usize {
        match self {
            Page::Overview => 0,
            Page::Radar => 1,
            Page::Light => 2,
            Page::SystemInfo => 3,
        }
    }

    /// Page at `index`, wrapping out-of-range values
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % PAGE_COUNT]
    }

    /// Page title shown in the header
    pub fn title(self) -> &'static str {
        match self {
            Page::Overview => "OVERVIEW",
            Page::Radar => "RADAR",
            Page::Light => "LIGHT",
            Page::SystemInfo => "SYSTEM",
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Self {
        Self::from_index(self.index() + PAGE_COUNT - 1)
    }
}

/// Menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuState {
    pub current_page: Page,
}

/// Menu controller
#[derive(Debug, Clone, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a navigation event
    ///
    /// Returns true when the page changed. `Select` has no effect at this
    /// layer.
    pub fn apply(&mut self, event: NavigationEvent) -> bool {
        let current = self.state.current_page;
        let next = match event {
            NavigationEvent::Next => current.next(),
            NavigationEvent::Previous => current.previous(),
            NavigationEvent::Select | NavigationEvent::None => current,
        };
        self.state.current_page = next;
        next != current
    }

    pub fn current_page(&self) -> Page {
        self.state.current_page
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_overview() {
        assert_eq!(MenuController::new().current_page(), Page::Overview);
    }

    #[test]
    fn test_next_wraps() {
        let mut menu = MenuController::new();
        assert!(menu.apply(NavigationEvent::Next));
        assert_eq!(menu.current_page(), Page::Radar);
        menu.apply(NavigationEvent::Next);
        menu.apply(NavigationEvent::Next);
        assert_eq!(menu.current_page(), Page::SystemInfo);
        menu.apply(NavigationEvent::Next);
        assert_eq!(menu.current_page(), Page::Overview);
    }

    #[test]
    fn test_previous_wraps() {
        let mut menu = MenuController::new();
        assert!(menu.apply(NavigationEvent::Previous));
        assert_eq!(menu.current_page(), Page::SystemInfo);
    }

    #[test]
    fn test_select_and_none_are_noops() {
        let mut menu = MenuController::new();
        assert!(!menu.apply(NavigationEvent::Select));
        assert!(!menu.apply(NavigationEvent::None));
        assert_eq!(menu.current_page(), Page::Overview);
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.index(), i);
            assert_eq!(Page::from_index(i), *page);
        }
        assert_eq!(Page::from_index(PAGE_COUNT + 1), Page::Radar);
    }
}
