//! Tracking-code lookup.

use leptos::*;

use ars_common::{format_date, ApplicationStatusView, IntakeError, ScoreTier};

use crate::services::GlooIntakeClient;
use crate::types::Notice;
use crate::INTAKE_URL;

#[component]
pub fn TrackApplication() -> impl IntoView {
    let (code, set_code) = create_signal(String::new());
    let (is_loading, set_is_loading) = create_signal(false);
    let (view_data, set_view_data) = create_signal(None::<ApplicationStatusView>);
    let (notice, set_notice) = create_signal(None::<Notice>);

    let on_lookup = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let tracking_code = code.get_untracked().trim().to_string();
        if tracking_code.is_empty() {
            set_notice.set(Some(Notice::error("Please enter your tracking code")));
            return;
        }

        set_is_loading.set(true);
        set_notice.set(None);
        set_view_data.set(None);

        spawn_local(async move {
            let client = GlooIntakeClient::new(INTAKE_URL);
            match client.application_status(&tracking_code).await {
                Ok(details) => {
                    set_notice.set(pending_notice(&details));
                    set_view_data.set(Some(details));
                }
                Err(IntakeError::Status(404)) => set_notice.set(Some(Notice::error(format!(
                    "No application found for {}",
                    tracking_code
                )))),
                Err(e) => {
                    log::warn!("Status lookup failed: {}", e);
                    set_notice.set(Some(Notice::error(
                        "Could not check your application. Please try again.",
                    )));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="card tracking-card">
            <h2>"Track Your Application"</h2>
            <p class="card-description">"Enter the tracking code you received after applying."</p>

            <form class="tracking-form" on:submit=on_lookup>
                <input
                    type="text"
                    placeholder="ARS-1A2B3C4D"
                    prop:value=move || code.get()
                    on:input=move |ev| set_code.set(event_target_value(&ev))
                />
                <button type="submit" class="button button-primary" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Checking..." } else { "Check Status" }}
                </button>
            </form>

            {move || notice.get().map(|n| view! {
                <div class=n.level.css_class()>{n.message}</div>
            })}

            {move || view_data.get().map(|details| view! { <StatusDetail details=details/> })}
        </div>
    }
}

/// Info notice for an application whose analysis has not finished.
fn pending_notice(details: &ApplicationStatusView) -> Option<Notice> {
    details.ai_score.is_none().then(|| {
        Notice::info("Your resume is still being analyzed. Check back in a few minutes.")
    })
}

#[component]
fn StatusDetail(details: ApplicationStatusView) -> impl IntoView {
    let score = details.ai_score.map(|score| {
        let tier = ScoreTier::from_score(score);
        view! {
            <span class=format!("score-badge {}", tier.css_class())>
                {format!("{:.0}", score)} " " {tier.label()}
            </span>
        }
    });
    let submitted = format_date(&details.submitted_at);
    let status = details.status.label();

    view! {
        <dl class="status-detail">
            <dt>"Tracking code"</dt>
            <dd class="tracking-code">{details.tracking_code}</dd>
            <dt>"Candidate"</dt>
            <dd>{details.candidate_name}</dd>
            <dt>"Position"</dt>
            <dd>{details.position}</dd>
            <dt>"Submitted"</dt>
            <dd>{submitted}</dd>
            <dt>"Status"</dt>
            <dd><span class="status-badge">{status}</span></dd>
            <dt>"AI Score"</dt>
            <dd>{score.map(IntoView::into_view).unwrap_or_else(|| "Analysis pending".into_view())}</dd>
        </dl>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ars_common::ApplicationStatus;
    use crate::types::NoticeLevel;

    fn details(ai_score: Option<f64>) -> ApplicationStatusView {
        ApplicationStatusView {
            tracking_code: "ARS-1A2B3C4D".into(),
            candidate_name: "John Doe".into(),
            position: "Data Scientist".into(),
            status: ApplicationStatus::New,
            ai_score,
            submitted_at: "2024-01-05T10:00:00+00:00".into(),
        }
    }

    #[test]
    fn test_pending_analysis_notice() {
        let notice = pending_notice(&details(None)).unwrap();
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.message.contains("still being analyzed"));

        assert_eq!(pending_notice(&details(Some(91.0))), None);
    }
}
