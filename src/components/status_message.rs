//! Transient status message for the outcome of the last action.

use leptos::prelude::*;

use crate::state::message::MessageState;

/// Status message area. Hidden until an action completes; styled by outcome.
#[component]
pub fn StatusMessage() -> impl IntoView {
    let message = expect_context::<RwSignal<MessageState>>();

    let class = move || {
        let m = message.get();
        if m.visible {
            m.kind.css_class().to_owned()
        } else {
            format!("{} hidden", m.kind.css_class())
        }
    };

    view! {
        <div id="message" class=class>
            {move || message.get().text}
        </div>
    }
}
