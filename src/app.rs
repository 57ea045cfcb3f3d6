//! Root application component and shared controller actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::activity_list::ActivityList;
use crate::components::signup_form::SignupForm;
use crate::components::status_message::StatusMessage;
use crate::net::api;
use crate::state::activities::ActivitiesState;
use crate::state::message::{MessageKind, MessageState};

/// Root application component.
///
/// Provides the shared state contexts, triggers the initial load, and
/// composes the page.
#[component]
pub fn App() -> impl IntoView {
    let activities = RwSignal::new(ActivitiesState::default());
    let message = RwSignal::new(MessageState::default());

    provide_context(activities);
    provide_context(message);

    // Initial load on mount.
    spawn_local(load_activities(activities));

    view! {
        <header>
            <h1>"Activity Board"</h1>
            <p>"Discover and sign up for extracurricular activities"</p>
        </header>

        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList/>
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm/>
                <StatusMessage/>
            </section>
        </main>
    }
}

/// Replace the rendered snapshot with the server's current state.
///
/// Idempotent; called on mount and after every successful mutation. On
/// failure the list area is marked failed and the last snapshot is kept, so
/// the dropdown is not cleared by a transient outage.
pub async fn load_activities(activities: RwSignal<ActivitiesState>) {
    match api::fetch_activities().await {
        Ok(snapshot) => activities.update(|s| s.loaded(snapshot)),
        Err(e) => {
            log::error!("failed to load activities: {e}");
            activities.update(ActivitiesState::mark_load_failed);
        }
    }
}

/// Show a status message and schedule the fixed dismissal.
///
/// Timers are never cancelled: a newer message replaces the text at once,
/// but a timer pending from an older message may still hide it early.
pub fn flash(message: RwSignal<MessageState>, text: String, kind: MessageKind) {
    message.update(|m| m.show(text, kind));

    #[cfg(target_arch = "wasm32")]
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::message::DISMISS_AFTER_MS).await;
        message.update(MessageState::dismiss);
    });
}
