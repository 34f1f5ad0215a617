use contracts::dashboard::NotificationItem;
use leptos::prelude::*;

#[component]
pub fn NotificationCard(item: NotificationItem) -> impl IntoView {
    view! {
        <div class="notification-card">
            <p class="notification-card__title">{format!("Project: {}", item.project)}</p>
            <p class="text-sm">{item.time}</p>
            <p class="notification-card__task">{format!("Task: {}", item.task)}</p>
        </div>
    }
}
