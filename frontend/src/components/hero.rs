//! Hero section component

use leptos::*;
use leptos_router::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Smart Hiring Made " <span class="highlight">"Simple"</span></h1>
            <p class="subtitle">
                "Automate resume screening with AI-powered analysis. "
                "Score candidates instantly, save time, and hire the best talent faster."
            </p>
            <div class="hero-actions">
                <A href="/apply" class="button button-primary">"Submit Resume"</A>
                <A href="/track" class="button button-outline">"Track Application"</A>
            </div>
        </div>
    }
}
