use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status counters
// ---------------------------------------------------------------------------

/// Value shown on a status card: a counter or free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(u32),
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", n),
            MetricValue::Text(s) => f.write_str(s),
        }
    }
}

/// Colour family of a status card (drives label and value colours).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Green,
    Orange,
    Red,
}

impl StatusTone {
    /// Darker shade, used for the card label.
    pub fn label_class(&self) -> &'static str {
        match self {
            StatusTone::Green => "status-card__label--green",
            StatusTone::Orange => "status-card__label--orange",
            StatusTone::Red => "status-card__label--red",
        }
    }

    /// Lighter shade, used for the large value.
    pub fn value_class(&self) -> &'static str {
        match self {
            StatusTone::Green => "status-card__value--green",
            StatusTone::Orange => "status-card__value--orange",
            StatusTone::Red => "status-card__value--red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMetric {
    pub label: String,
    pub value: MetricValue,
    pub tone: StatusTone,
}

impl StatusMetric {
    pub fn count(label: &str, value: u32, tone: StatusTone) -> Self {
        Self {
            label: label.to_string(),
            value: MetricValue::Count(value),
            tone,
        }
    }
}

// ---------------------------------------------------------------------------
// Card records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub project: String,
    pub time: String,
    pub task: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectItem {
    pub title: String,
    pub deadline: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskItem {
    pub task: String,
    /// Assignee with role, e.g. "Mr. Vijay (technical)".
    pub assignee: String,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingItem {
    pub name: String,
    pub organiser: String,
    pub date: String,
    pub duration: String,
}

// ---------------------------------------------------------------------------
// Page content
// ---------------------------------------------------------------------------

/// Everything the dashboard cards display, in render order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardContent {
    pub statuses: Vec<StatusMetric>,
    pub notifications: Vec<NotificationItem>,
    pub projects: Vec<ProjectItem>,
    pub tasks: Vec<TaskItem>,
    pub trainings: Vec<TrainingItem>,
}

impl DashboardContent {
    /// Literal content of the home dashboard. Built fresh on every call.
    pub fn home() -> Self {
        let notification = NotificationItem {
            project: "Widening of roads".to_string(),
            time: "19th August 2024 • 15:30 hrs".to_string(),
            task: "Finalizing the Excavation Plan for Road Widening Project".to_string(),
        };
        let project = ProjectItem {
            title: "Widening Of Roads".to_string(),
            deadline: "28th August 2024".to_string(),
            location: "Chennai Central".to_string(),
        };
        let task = TaskItem {
            task: "Finalize Excavation Depth for Road Widening".to_string(),
            assignee: "Mr. Vijay (technical)".to_string(),
            deadline: "24th August 2024".to_string(),
        };
        let training = TrainingItem {
            name: "Urban Planning and GIS Integration".to_string(),
            organiser: "Indian Institute of Urban Affairs".to_string(),
            date: "12th September, 2024".to_string(),
            duration: "10:00 AM - 4:00 PM".to_string(),
        };

        Self {
            statuses: vec![
                StatusMetric::count("ONGOING PROJECTS", 5, StatusTone::Green),
                StatusMetric::count("UPCOMING PROJECTS", 4, StatusTone::Orange),
                StatusMetric::count("COMPLETED PROJECTS", 20, StatusTone::Red),
            ],
            notifications: vec![notification; 2],
            projects: vec![project; 3],
            tasks: vec![task; 3],
            trainings: vec![training; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_card_counts() {
        let content = DashboardContent::home();
        assert_eq!(content.statuses.len(), 3);
        assert_eq!(content.notifications.len(), 2);
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.tasks.len(), 3);
        assert_eq!(content.trainings.len(), 2);
    }

    #[test]
    fn test_home_status_values() {
        let content = DashboardContent::home();
        let values: Vec<String> = content.statuses.iter().map(|s| s.value.to_string()).collect();
        assert_eq!(values, vec!["5", "4", "20"]);

        let tones: Vec<StatusTone> = content.statuses.iter().map(|s| s.tone).collect();
        assert_eq!(
            tones,
            vec![StatusTone::Green, StatusTone::Orange, StatusTone::Red]
        );
        assert_eq!(content.statuses[0].label, "ONGOING PROJECTS");
        assert_eq!(content.statuses[2].label, "COMPLETED PROJECTS");
    }

    #[test]
    fn test_home_is_idempotent() {
        assert_eq!(DashboardContent::home(), DashboardContent::home());
    }

    #[test]
    fn test_home_records() {
        let content = DashboardContent::home();
        assert_eq!(content.projects[1].location, "Chennai Central");
        assert_eq!(content.tasks[0].assignee, "Mr. Vijay (technical)");
        assert_eq!(content.trainings[1].duration, "10:00 AM - 4:00 PM");
        assert_eq!(
            content.notifications[0].time,
            "19th August 2024 • 15:30 hrs"
        );
    }

    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::Count(20).to_string(), "20");
        assert_eq!(MetricValue::Text("N/A".to_string()).to_string(), "N/A");
    }

    #[test]
    fn test_metric_value_serde_untagged() {
        let count: MetricValue = serde_json::from_str("5").unwrap();
        assert_eq!(count, MetricValue::Count(5));
        let text: MetricValue = serde_json::from_str("\"soon\"").unwrap();
        assert_eq!(text, MetricValue::Text("soon".to_string()));
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(StatusTone::Orange.label_class(), "status-card__label--orange");
        assert_eq!(StatusTone::Red.value_class(), "status-card__value--red");
    }
}
