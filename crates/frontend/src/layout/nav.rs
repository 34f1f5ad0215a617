use crate::dashboard::context::{nav_tab_class, use_dashboard};
use contracts::dashboard::Tab;
use leptos::prelude::*;

#[component]
pub fn NavTabs() -> impl IntoView {
    view! {
        <nav data-zone="nav" class="nav-bar">
            {Tab::ALL
                .into_iter()
                .map(|tab| view! { <NavTab tab=tab /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn NavTab(tab: Tab) -> impl IntoView {
    let dashboard = use_dashboard();

    let is_active = Memo::new(move |_| dashboard.selection.get().is_active(tab));
    let on_click = move |_| dashboard.select_tab(tab);

    view! {
        <button
            class=move || nav_tab_class(is_active.get())
            data-tab=tab.key()
            aria-pressed=move || is_active.get().to_string()
            on:click=on_click
        >
            {tab.label()}
        </button>
    }
}
