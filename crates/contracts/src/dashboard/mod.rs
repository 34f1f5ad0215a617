//! Shared model of the UrbanNet public works dashboard.
//!
//! Everything here is plain data: the fixed navigation tab set, the card
//! records and the literal page content.

pub mod content;
pub mod tab;

pub use content::{
    DashboardContent, MetricValue, NotificationItem, ProjectItem, StatusMetric, StatusTone,
    TaskItem, TrainingItem,
};
pub use tab::Tab;

/// Document title of the page.
pub const PAGE_TITLE: &str = "UrbanNet Dashboard";
pub const HEADER_TITLE: &str = "DEPARTMENT OF PUBLIC WORKS";

pub const FOOTER_LINKS: &str = "Feedback | Complaint";
pub const FOOTER_HELP: &str = "Help";
pub const FOOTER_COPYRIGHT: &str = "Copyrights 2024 UrbanNet All Rights Reserved.";

/// Static assets consumed by the page (served by the host, never produced).
pub const USER_ICON_PATH: &str = "/assets/icons/user.svg";
pub const HERO_IMAGE_PATH: &str = "/p.png";
pub const HERO_IMAGE_ALT: &str = "Construction";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_chrome() {
        assert_eq!(PAGE_TITLE, "UrbanNet Dashboard");
        assert_eq!(HEADER_TITLE, "DEPARTMENT OF PUBLIC WORKS");
        assert_eq!(
            FOOTER_COPYRIGHT,
            "Copyrights 2024 UrbanNet All Rights Reserved."
        );
    }
}
