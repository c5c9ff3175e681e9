pub mod common;
pub mod confirm_dialog;
pub mod empty_state;
pub mod layout;
