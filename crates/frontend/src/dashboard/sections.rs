/// Blocks of the dashboard page, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Nav,
    Hero,
    Statuses,
    NotificationsAndProjects,
    TasksAndTrainings,
    Footer,
}

/// Render order of the page. Independent of the active tab.
pub const PAGE_SECTIONS: [Section; 7] = [
    Section::Header,
    Section::Nav,
    Section::Hero,
    Section::Statuses,
    Section::NotificationsAndProjects,
    Section::TasksAndTrainings,
    Section::Footer,
];

impl Section {
    pub fn zone(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Nav => "nav",
            Section::Hero => "hero",
            Section::Statuses => "statuses",
            Section::NotificationsAndProjects => "notifications-projects",
            Section::TasksAndTrainings => "tasks-trainings",
            Section::Footer => "footer",
        }
    }
}
