use super::ViewButton;
use contracts::dashboard::ProjectItem;
use leptos::prelude::*;

pub fn location_line(location: &str) -> String {
    format!("📍 {}", location)
}

#[component]
pub fn ProjectCard(item: ProjectItem) -> impl IntoView {
    let subject = item.title.clone();

    view! {
        <div class="project-card">
            <div class="project-card__body">
                <p class="project-card__title">{item.title}</p>
                <p class="text-sm text-muted">{format!("Deadline: {}", item.deadline)}</p>
                <p class="text-sm text-muted">{location_line(&item.location)}</p>
            </div>
            <ViewButton subject=subject />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_line() {
        assert_eq!(location_line("Chennai Central"), "📍 Chennai Central");
    }
}
