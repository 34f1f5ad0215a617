use super::ViewButton;
use contracts::dashboard::TaskItem;
use leptos::prelude::*;

#[component]
pub fn TaskCard(item: TaskItem) -> impl IntoView {
    let subject = item.task.clone();

    view! {
        <div class="notification-card">
            <p class="notification-card__title">{format!("Task: {}", item.task)}</p>
            <p class="text-sm">{format!("Assigned to: {}", item.assignee)}</p>
            <p class="text-sm text-muted">{format!("Deadline: {}", item.deadline)}</p>
            <ViewButton subject=subject />
        </div>
    }
}
