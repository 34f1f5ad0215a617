use contracts::dashboard::Tab;
use leptos::prelude::*;

/// Which nav tab is highlighted. Always exactly one of [`Tab::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelection {
    active: Tab,
}

impl TabSelection {
    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// Returns `true` when the highlighted tab actually changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }
}

/// CSS class of a nav button.
pub fn nav_tab_class(is_active: bool) -> &'static str {
    if is_active {
        "nav-tab nav-tab--active"
    } else {
        "nav-tab"
    }
}

/// View-level state of the dashboard page, provided via context by `App`.
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub selection: RwSignal<TabSelection>,
}

impl DashboardContext {
    pub fn new() -> Self {
        Self {
            selection: RwSignal::new(TabSelection::default()),
        }
    }

    pub fn select_tab(&self, tab: Tab) {
        self.selection.maybe_update(|selection| {
            let changed = selection.select(tab);
            if changed {
                log::debug!("select_tab: active='{}'", tab);
            }
            changed
        });
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext context not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_tab_is_home() {
        let selection = TabSelection::default();
        assert_eq!(selection.active(), Tab::Home);
        assert!(selection.is_active(Tab::Home));
    }

    #[test]
    fn test_select_makes_tab_uniquely_active() {
        for tab in Tab::ALL {
            let mut selection = TabSelection::default();
            selection.select(tab);
            let active: Vec<Tab> = Tab::ALL
                .into_iter()
                .filter(|t| selection.is_active(*t))
                .collect();
            assert_eq!(active, vec![tab]);
        }
    }

    #[test]
    fn test_any_tab_reaches_any_tab() {
        for from in Tab::ALL {
            for to in Tab::ALL {
                let mut selection = TabSelection::default();
                selection.select(from);
                selection.select(to);
                assert_eq!(selection.active(), to);
            }
        }
    }

    #[test]
    fn test_reselect_reports_no_change() {
        let mut selection = TabSelection::default();
        assert!(!selection.select(Tab::Home));
        assert!(selection.select(Tab::Projects));
        assert!(!selection.select(Tab::Projects));
        assert_eq!(selection.active(), Tab::Projects);
    }

    #[test]
    fn test_selection_leaves_content_unchanged() {
        let before = contracts::dashboard::DashboardContent::home();
        let mut selection = TabSelection::default();
        selection.select(Tab::Projects);
        assert_eq!(selection.active(), Tab::Projects);
        assert_eq!(contracts::dashboard::DashboardContent::home(), before);
    }

    #[test]
    fn test_select_tab_updates_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let dashboard = DashboardContext::new();
            assert_eq!(dashboard.selection.get_untracked().active(), Tab::Home);

            dashboard.select_tab(Tab::Projects);
            assert_eq!(dashboard.selection.get_untracked().active(), Tab::Projects);

            dashboard.select_tab(Tab::Projects);
            assert_eq!(dashboard.selection.get_untracked().active(), Tab::Projects);

            dashboard.select_tab(Tab::DiscussionForum);
            let selection = dashboard.selection.get_untracked();
            assert!(selection.is_active(Tab::DiscussionForum));
            assert!(!selection.is_active(Tab::Projects));
        });
    }

    #[test]
    fn test_nav_tab_class() {
        assert_eq!(nav_tab_class(true), "nav-tab nav-tab--active");
        assert_eq!(nav_tab_class(false), "nav-tab");
    }
}
