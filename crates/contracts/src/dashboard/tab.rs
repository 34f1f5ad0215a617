use serde::{Deserialize, Serialize};
use std::fmt;

/// Navigation tab of the dashboard header.
///
/// The set is closed: the nav bar renders exactly [`Tab::ALL`] and the active
/// tab is always one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    #[serde(rename = "HOME")]
    Home,
    #[serde(rename = "PROJECTS")]
    Projects,
    #[serde(rename = "TASKS")]
    Tasks,
    #[serde(rename = "RESOURCES")]
    Resources,
    #[serde(rename = "DISCUSSION FORUM")]
    DiscussionForum,
    #[serde(rename = "TRAININGS")]
    Trainings,
    #[serde(rename = "DASHBOARD")]
    Dashboard,
}

impl Tab {
    /// All tabs in nav bar order.
    pub const ALL: [Tab; 7] = [
        Tab::Home,
        Tab::Projects,
        Tab::Tasks,
        Tab::Resources,
        Tab::DiscussionForum,
        Tab::Trainings,
        Tab::Dashboard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "HOME",
            Tab::Projects => "PROJECTS",
            Tab::Tasks => "TASKS",
            Tab::Resources => "RESOURCES",
            Tab::DiscussionForum => "DISCUSSION FORUM",
            Tab::Trainings => "TRAININGS",
            Tab::Dashboard => "DASHBOARD",
        }
    }

    /// Stable lowercase key, used for DOM ids and data attributes.
    pub fn key(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Projects => "projects",
            Tab::Tasks => "tasks",
            Tab::Resources => "resources",
            Tab::DiscussionForum => "discussion_forum",
            Tab::Trainings => "trainings",
            Tab::Dashboard => "dashboard",
        }
    }

    pub fn from_label(label: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.label() == label)
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
