//! Job application form.
//!
//! Every view here renders from the shared `SubmissionController`; the
//! component only forwards input events to it and reflects its state.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use ars_common::{
    format_megabytes, open_position_titles, Field, IntakeClient, ResumeSource, SubmissionController,
    SubmissionOutcome, SubmitBlocked, ValidationErrors,
};

use crate::services::GlooIntakeClient;
use crate::types::{BrowserResume, Notice};
use crate::{INTAKE_URL, RESUME_ACCEPT};

type Controller = RwSignal<SubmissionController<BrowserResume>>;

#[component]
pub fn ApplicationForm() -> impl IntoView {
    let controller: Controller = create_rw_signal(SubmissionController::new());
    let outcome = create_memo(move |_| controller.with(|c| c.outcome().cloned()));

    view! {
        <div class="card application-card">
            <Show
                when=move || outcome.with(Option::is_none)
                fallback=move || {
                    outcome
                        .get()
                        .map(|outcome| view! { <SuccessCard outcome=outcome controller=controller/> })
                }
            >
                <DraftForm controller=controller/>
            </Show>
        </div>
    }
}

#[component]
fn DraftForm(controller: Controller) -> impl IntoView {
    let (errors, set_errors) = create_signal(ValidationErrors::default());
    let (file_error, set_file_error) = create_signal(None::<String>);
    let (notice, set_notice) = create_signal(None::<Notice>);
    let client = store_value(GlooIntakeClient::new(INTAKE_URL));

    let submitting = create_memo(move |_| controller.with(|c| c.is_submitting()));

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        match controller.try_update(|c| c.select_resume(BrowserResume::from(file))) {
            Some(Ok(())) => set_file_error.set(None),
            Some(Err(rejection)) => {
                set_file_error.set(Some(rejection.to_string()));
                input.set_value("");
            }
            None => {}
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = match controller.try_update(|c| c.begin_submit()) {
            Some(Ok(form)) => form,
            Some(Err(SubmitBlocked::Invalid(found))) => {
                set_errors.set(found);
                return;
            }
            Some(Err(blocked)) => {
                log::debug!("Submit ignored: {}", blocked);
                return;
            }
            None => return,
        };

        set_errors.set(ValidationErrors::default());
        set_notice.set(None);

        spawn_local(async move {
            let result = client.get_value().submit(&form).await;
            if let Some(Err(e)) = controller.try_update(|c| c.finish(result)) {
                set_notice.set(Some(Notice::error(e.to_string())));
            }
        });
    };

    let selected_resume = move || {
        controller.with(|c| {
            c.draft()
                .and_then(|d| d.resume())
                .map(|r| (r.file_name().to_string(), r.size()))
        })
    };

    let resume_error = move || {
        file_error
            .get()
            .or_else(|| errors.with(|e| e.resume().map(str::to_string)))
    };

    view! {
        <h2>"Submit Your Application"</h2>
        <p class="card-description">
            "Fill out the form below and upload your resume. Our AI will analyze it instantly."
        </p>

        {move || notice.get().map(|n| view! {
            <div class=n.level.css_class()>{n.message}</div>
        })}

        <form on:submit=on_submit novalidate=true>
            <div class="form-group">
                <label for="position">"Position *"</label>
                <select
                    id="position"
                    prop:value=move || field_value(controller, Field::Position)
                    on:change=move |ev| set_field(controller, Field::Position, event_target_value(&ev))
                >
                    <option value="">"Select a position"</option>
                    {open_position_titles()
                        .map(|title| view! { <option value=title>{title}</option> })
                        .collect_view()}
                </select>
                <FieldError field=Field::Position errors=errors/>
            </div>

            <div class="form-group">
                <label for="resume">"Resume *"</label>
                <label for="resume" class="upload-section">
                    <input
                        type="file"
                        id="resume"
                        accept=RESUME_ACCEPT
                        style="display:none"
                        on:change=on_file_change
                    />
                    {move || match selected_resume() {
                        Some((name, size)) => view! {
                            <p class="upload-text">"✓ " {name}</p>
                            <p class="upload-hint">{format_megabytes(size)}</p>
                        }
                        .into_view(),
                        None => view! {
                            <div class="upload-icon">"📤"</div>
                            <p class="upload-text">"Click to upload or drag and drop"</p>
                            <p class="upload-hint">"PDF or DOCX (Max 5MB)"</p>
                        }
                        .into_view(),
                    }}
                </label>
                {move || resume_error().map(|message| view! {
                    <p class="field-error">{message}</p>
                })}
            </div>

            <div class="form-row">
                <TextField
                    field=Field::CandidateName
                    label="Full Name *"
                    placeholder="John Doe"
                    controller=controller
                    errors=errors
                />
                <TextField
                    field=Field::Email
                    label="Email *"
                    input_type="email"
                    placeholder="john@example.com"
                    controller=controller
                    errors=errors
                />
            </div>

            <div class="form-row">
                <TextField
                    field=Field::Phone
                    label="Phone *"
                    input_type="tel"
                    placeholder="+1-555-0123"
                    controller=controller
                    errors=errors
                />
                <TextField
                    field=Field::LinkedIn
                    label="LinkedIn Profile"
                    placeholder="linkedin.com/in/johndoe"
                    controller=controller
                    errors=errors
                />
            </div>

            <div class="form-group">
                <label for="coverLetter">"Cover Letter (Optional)"</label>
                <textarea
                    id="coverLetter"
                    rows=4
                    placeholder="Tell us why you're a great fit for this position..."
                    prop:value=move || field_value(controller, Field::CoverLetter)
                    on:input=move |ev| set_field(controller, Field::CoverLetter, event_target_value(&ev))
                ></textarea>
            </div>

            <button
                type="submit"
                class="button button-primary button-block"
                disabled=move || submitting.get()
            >
                {move || if submitting.get() { "Submitting..." } else { "Submit Application" }}
            </button>
            <p class="form-hint">"By submitting, you agree to our privacy policy and terms of service"</p>
        </form>
    }
}

#[component]
fn TextField(
    field: Field,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    controller: Controller,
    errors: ReadSignal<ValidationErrors>,
) -> impl IntoView {
    let id = field.wire_name();

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                placeholder=placeholder
                prop:value=move || field_value(controller, field)
                on:input=move |ev| set_field(controller, field, event_target_value(&ev))
            />
            <FieldError field=field errors=errors/>
        </div>
    }
}

#[component]
fn FieldError(field: Field, errors: ReadSignal<ValidationErrors>) -> impl IntoView {
    move || {
        errors
            .with(|e| e.get(field))
            .map(|message| view! { <p class="field-error">{message}</p> })
    }
}

#[component]
fn SuccessCard(outcome: SubmissionOutcome, controller: Controller) -> impl IntoView {
    let provisional = outcome.tracking_code.is_provisional();

    view! {
        <div class="success-card">
            <div class="success-icon">"✅"</div>
            <h2>"Application Submitted!"</h2>
            <p class="card-description">
                "Thank you for applying. Your resume is being analyzed by our AI system."
            </p>

            <div class="tracking-box">
                <p class="tracking-label">"Your Tracking Code"</p>
                <p class="tracking-code">{outcome.tracking_code.to_string()}</p>
                <p class="tracking-hint">
                    {if provisional {
                        "The service did not confirm this code yet. Keep it as a reference."
                    } else {
                        "Save this code to check your application status"
                    }}
                </p>
            </div>

            <ul class="next-steps">
                <li>"✓ Resume received and uploaded"</li>
                <li>"✓ AI analysis in progress (typically takes 2-3 minutes)"</li>
                <li>"✓ You'll receive an email confirmation shortly"</li>
                <li>"✓ Our HR team will review top candidates within 48 hours"</li>
            </ul>

            <button
                class="button button-outline button-block"
                on:click=move |_| controller.update(|c| c.reset())
            >
                "Submit Another Application"
            </button>
        </div>
    }
}

fn field_value(controller: Controller, field: Field) -> String {
    controller.with(|c| {
        c.draft()
            .map(|d| d.field(field).to_string())
            .unwrap_or_default()
    })
}

fn set_field(controller: Controller, field: Field, value: String) {
    controller.update(|c| {
        if let Err(locked) = c.set_field(field, value) {
            log::debug!("Ignored edit to {}: {}", field.wire_name(), locked);
        }
    });
}
