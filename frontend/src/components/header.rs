use leptos::*;
use leptos_router::A;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">"🧠 " {APP_NAME}</A>
            </div>
            <nav class="header-right">
                <A href="/apply" class="nav-link">"Apply Now"</A>
                <A href="/track" class="nav-link">"Track Application"</A>
            </nav>
        </header>
    }
}
