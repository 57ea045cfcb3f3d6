//! Signup form: email input plus activity dropdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{flash, load_activities};
use crate::net::api::{self, ApiError};
use crate::state::activities::ActivitiesState;
use crate::state::message::{MessageKind, MessageState};

/// Signup form.
///
/// The browser's form constraints enforce non-empty fields; no further
/// client-side validation. On success the fields are cleared and the
/// activity list reloaded; on rejection the server's detail text is shown
/// verbatim and nothing is reset or reloaded.
#[component]
pub fn SignupForm() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let message = expect_context::<RwSignal<MessageState>>();

    let email = RwSignal::new(String::new());
    let selected = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submitted_email = email.get();
        let activity = selected.get();

        spawn_local(async move {
            match api::signup(&activity, &submitted_email).await {
                Ok(confirmation) => {
                    flash(message, confirmation, MessageKind::Success);
                    email.set(String::new());
                    selected.set(String::new());
                    load_activities(activities).await;
                }
                Err(ApiError::Rejected { detail }) => {
                    flash(
                        message,
                        detail.unwrap_or_else(|| "An error occurred".to_owned()),
                        MessageKind::Error,
                    );
                }
                Err(e @ ApiError::Transport(_)) => {
                    log::error!("signup failed: {e}");
                    flash(
                        message,
                        "Failed to sign up. Please try again.".to_owned(),
                        MessageKind::Error,
                    );
                }
            }
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <label for="email">"Email"</label>
            <input
                id="email"
                type="email"
                required=true
                placeholder="your-email@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />

            <label for="activity">"Activity"</label>
            <select
                id="activity"
                required=true
                prop:value=move || selected.get()
                on:change=move |ev| selected.set(event_target_value(&ev))
            >
                <option value="">"-- Select an activity --"</option>
                {move || {
                    activities
                        .get()
                        .activity_names()
                        .into_iter()
                        .map(|name| {
                            let value = name.clone();
                            view! { <option value=value>{name}</option> }
                        })
                        .collect::<Vec<_>>()
                }}
            </select>

            <button type="submit">"Sign Up"</button>
        </form>
    }
}
