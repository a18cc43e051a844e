//! Landing page feature cards and call to action.

use leptos::*;
use leptos_router::A;

use crate::APP_NAME;

/// (icon, title, description)
const FEATURES: [(&str, &str, &str); 4] = [
    (
        "🧠",
        "AI-Powered Analysis",
        "Advanced algorithms analyze skills, experience, and cultural fit with 95% accuracy",
    ),
    (
        "⏱️",
        "Save 50% Time",
        "Reduce resume review time from hours to minutes with automated scoring",
    ),
    (
        "📈",
        "Data-Driven Insights",
        "Get detailed breakdowns of candidate strengths and areas for improvement",
    ),
    (
        "👥",
        "Team Collaboration",
        "Share insights, trigger workflows, and coordinate hiring decisions seamlessly",
    ),
];

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features">
            <h2>"Why Use " {APP_NAME} "?"</h2>
            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .map(|(icon, title, description)| view! {
                        <div class="card feature-card">
                            <div class="feature-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <h2>"Ready to Transform Your Hiring?"</h2>
            <p>"Join companies using AI to find the best candidates faster"</p>
            <A href="/apply" class="button button-secondary">"Get Started Free"</A>
        </section>
    }
}
