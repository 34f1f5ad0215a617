use crate::dashboard::{DashboardContext, HomePage};
use contracts::dashboard::PAGE_TITLE;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Active nav tab, shared by the nav bar.
    provide_context(DashboardContext::new());
    document().set_title(PAGE_TITLE);

    view! {
        <ConfigProvider>
            <HomePage />
        </ConfigProvider>
    }
}
