//! One rendered activity: metadata, availability, and the participant roster.

use leptos::prelude::*;

use crate::state::activities::Activity;

/// Card for a single activity.
///
/// Spots left come straight from the snapshot arithmetic; no counter is
/// kept anywhere else. Delete controls invoke the shared unregister handler
/// with this row's identifiers.
#[component]
pub fn ActivityCard(
    name: String,
    activity: Activity,
    on_unregister: Callback<(String, String)>,
) -> impl IntoView {
    let spots_left = activity.spots_left();
    let participants = activity.participants.clone();

    let roster = if participants.is_empty() {
        view! { <p class="no-participants">"No participants yet"</p> }.into_any()
    } else {
        let heading = format!("Participants ({})", participants.len());
        let rows = participants
            .into_iter()
            .map(|email| {
                let row = (name.clone(), email.clone());
                view! {
                    <li>
                        {email}
                        <button
                            class="participant-delete"
                            title="Unregister"
                            on:click=move |_| on_unregister.run(row.clone())
                        >
                            "\u{1f5d1}"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <h5 class="participants-heading">{heading}</h5>
            <ul class="participants-list">{rows}</ul>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{name.clone()}</h4>
            <p>{activity.description.clone()}</p>
            <p>
                <strong>"Schedule: "</strong>
                {activity.schedule.clone()}
            </p>
            <p>
                <strong>"Availability: "</strong>
                {format!("{spots_left} spots left")}
            </p>
            {roster}
        </div>
    }
}
