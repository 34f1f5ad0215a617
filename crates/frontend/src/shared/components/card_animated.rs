//! CardAnimated — Thaw `Card` that fades in on mount.
//!
//! The animation itself is `@keyframes card-appear` in `styles/dashboard.css`.
//!
//! ```ignore
//! <CardAnimated class="panel" delay_ms=stagger_delay(0)>
//!     <p>"content"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Delay step between neighbouring cards.
pub const STAGGER_STEP_MS: u32 = 80;

/// Entrance delay for the card at `index` in a row.
pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * STAGGER_STEP_MS
}

fn animation_style(delay_ms: u32) -> String {
    format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms)
}

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <Card class=class attr:style=animation_style(delay_ms)>
            {children()}
        </Card>
    }
}
