use contracts::dashboard::{FOOTER_COPYRIGHT, FOOTER_HELP, FOOTER_LINKS};
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <div class="footer__links">
                <p>{FOOTER_LINKS}</p>
                <p>{FOOTER_HELP}</p>
            </div>
            <p class="footer__copyright">{FOOTER_COPYRIGHT}</p>
        </footer>
    }
}
