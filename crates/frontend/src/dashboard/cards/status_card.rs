use crate::shared::components::card_animated::CardAnimated;
use contracts::dashboard::StatusMetric;
use leptos::prelude::*;

#[component]
pub fn StatusCard(
    metric: StatusMetric,
    /// Entrance animation delay in ms
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let label_class = format!("status-card__label {}", metric.tone.label_class());
    let value_class = format!("status-card__value {}", metric.tone.value_class());

    view! {
        <CardAnimated class="status-card" delay_ms=delay_ms>
            <p class=label_class>{metric.label}</p>
            <p class=value_class>{metric.value.to_string()}</p>
        </CardAnimated>
    }
}
