use contracts::dashboard::USER_ICON_PATH;
use leptos::prelude::*;

pub fn icon(name: &str) -> AnyView {
    match name {
        "user" => view! {
            <img src=USER_ICON_PATH alt="User" width="24" height="24" />
        }.into_any(),
        _ => view! { <span class="icon-missing"></span> }.into_any(),
    }
}
