use super::ViewButton;
use contracts::dashboard::TrainingItem;
use leptos::prelude::*;

#[component]
pub fn TrainingCard(item: TrainingItem) -> impl IntoView {
    let subject = item.name.clone();

    view! {
        <div class="notification-card">
            <p>"TRAINING NAME: " <strong>{item.name}</strong></p>
            <p>{format!("ORGANISER: {}", item.organiser)}</p>
            <p>{format!("DATE: {}", item.date)}</p>
            <p>{format!("DURATION: {}", item.duration)}</p>
            <ViewButton subject=subject />
        </div>
    }
}
