//! Activity list: one card per snapshot entry, plus the unregister action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::{flash, load_activities};
use crate::components::activity_card::ActivityCard;
use crate::net::api::{self, ApiError};
use crate::state::activities::ActivitiesState;
use crate::state::message::{MessageKind, MessageState};

/// List of rendered activity cards.
///
/// Shows a loading placeholder before the first snapshot and a literal
/// failure message after a failed load. One unregister handler serves every
/// delete control; each row hands it its own (activity, email) pair, so rows
/// replaced wholesale on refresh need no rebinding.
#[component]
pub fn ActivityList() -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();
    let message = expect_context::<RwSignal<MessageState>>();

    let on_unregister = Callback::new(move |(activity, email): (String, String)| {
        spawn_local(async move {
            match api::unregister(&activity, &email).await {
                Ok(confirmation) => {
                    flash(message, confirmation, MessageKind::Success);
                    load_activities(activities).await;
                }
                Err(ApiError::Rejected { detail }) => {
                    flash(
                        message,
                        detail.unwrap_or_else(|| "Failed to unregister".to_owned()),
                        MessageKind::Error,
                    );
                }
                Err(e @ ApiError::Transport(_)) => {
                    log::error!("unregister failed: {e}");
                    flash(
                        message,
                        "Failed to unregister. Try again.".to_owned(),
                        MessageKind::Error,
                    );
                }
            }
        });
    });

    view! {
        <div id="activities-list">
            {move || {
                let state = activities.get();
                if state.load_failed {
                    return view! {
                        <p>"Failed to load activities. Please try again later."</p>
                    }
                        .into_any();
                }

                match state.snapshot {
                    None => view! { <p>"Loading activities..."</p> }.into_any(),
                    Some(snapshot) => snapshot
                        .into_iter()
                        .map(|(name, activity)| {
                            view! {
                                <ActivityCard
                                    name=name
                                    activity=activity
                                    on_unregister=on_unregister
                                />
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any(),
                }
            }}
        </div>
    }
}
