//! Top-level page selection.
//!
//! The application shows exactly one page at a time. There is no nested
//! routing and no history: selecting a page replaces the current one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pages of the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Dashboard,
    Inventory,
    Orders,
    Analytics,
    Settings,
}

impl Page {
    /// Sidebar order
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Inventory,
        Page::Orders,
        Page::Analytics,
        Page::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Inventory => "inventory",
            Page::Orders => "orders",
            Page::Analytics => "analytics",
            Page::Settings => "settings",
        }
    }

    /// Map a page identifier to its page. Unknown identifiers fall back to the dashboard.
    pub fn resolve(key: &str) -> Page {
        Page::ALL
            .into_iter()
            .find(|page| page.key() == key)
            .unwrap_or_default()
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Inventory => "Inventory",
            Page::Orders => "Orders",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "layout-dashboard",
            Page::Inventory => "package",
            Page::Orders => "shopping-cart",
            Page::Analytics => "bar-chart",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Sustainability Dashboard",
            Page::Inventory => "Inventory Management",
            Page::Orders => "Orders",
            Page::Analytics => "Analytics",
            Page::Settings => "Settings",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            Page::Dashboard => "Monitor your business and environmental impact",
            Page::Inventory => "Manage your products across all channels",
            Page::Orders => "Track and manage your orders across all channels",
            Page::Analytics => "Monitor your business performance",
            Page::Settings => "Configure your Amazon MCF integration",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Holder of the current page. `select_page` is the only mutator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageRouter {
    current: Page,
}

impl PageRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Page {
        self.current
    }

    /// Switch pages unconditionally. Unknown identifiers select the dashboard.
    pub fn select_page(&mut self, key: &str) -> Page {
        let page = Page::resolve(key);
        if page.key() != key {
            log::debug!("unknown page id {:?}, falling back to {}", key, page);
        }
        self.current = page;
        page
    }

    /// Page to render for the current selection
    pub fn resolve(&self) -> Page {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_page_is_dashboard() {
        assert_eq!(PageRouter::new().resolve(), Page::Dashboard);
    }

    #[test]
    fn test_unknown_page_falls_back_to_dashboard() {
        let mut router = PageRouter::new();
        router.select_page("orders");
        assert_eq!(router.resolve(), Page::Orders);

        router.select_page("bogus-page");
        assert_eq!(router.resolve(), Page::Dashboard);

        router.select_page("inventory");
        assert_eq!(router.resolve(), Page::Inventory);
    }

    #[test]
    fn test_every_page_reachable_from_every_page() {
        let mut router = PageRouter::new();
        for from in Page::ALL {
            for to in Page::ALL {
                router.select_page(from.key());
                assert_eq!(router.select_page(to.key()), to);
                assert_eq!(router.current(), to);
            }
        }
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        assert_eq!(Page::resolve("Orders"), Page::Dashboard);
        assert_eq!(Page::resolve("settings"), Page::Settings);
    }

    #[test]
    fn test_serde_matches_keys() {
        for page in Page::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.key()));
        }
    }
}
