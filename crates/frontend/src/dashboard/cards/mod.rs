//! Card renderers. Each one is a pure function of the record it is given.

pub mod notification_card;
pub mod project_card;
pub mod status_card;
pub mod task_card;
pub mod training_card;

pub use notification_card::NotificationCard;
pub use project_card::ProjectCard;
pub use status_card::StatusCard;
pub use task_card::TaskCard;
pub use training_card::TrainingCard;

use leptos::prelude::*;
use thaw::*;

/// "View" button shared by project, task and training cards.
///
/// The detail pages do not exist yet, so the click is only logged.
#[component]
pub fn ViewButton(#[prop(into)] subject: String) -> impl IntoView {
    view! {
        <Button
            size=ButtonSize::Small
            appearance=ButtonAppearance::Primary
            class="card-view-btn"
            on_click=move |_| log::debug!("view requested: '{}'", subject)
        >
            "View"
        </Button>
    }
}
