use crate::shared::icons::icon;
use contracts::dashboard::HEADER_TITLE;
use leptos::prelude::*;
use thaw::*;

/// Page header: centered department title, user avatar and Logout.
///
/// Session handling lives outside this page, so both buttons only log.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <h1 class="header__title">{HEADER_TITLE}</h1>
            <div class="header__actions">
                <button
                    class="header__avatar"
                    aria-label="User"
                    on:click=move |_| log::debug!("user menu requested")
                >
                    {icon("user")}
                </button>
                <Button
                    class="header__logout"
                    shape=ButtonShape::Circular
                    on_click=move |_| log::debug!("logout requested")
                >
                    "Logout"
                </Button>
            </div>
        </header>
    }
}
