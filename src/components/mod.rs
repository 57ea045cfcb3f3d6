//! View components over the shared state contexts.

pub mod activity_card;
pub mod activity_list;
pub mod signup_form;
pub mod status_message;
