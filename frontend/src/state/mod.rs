pub mod commands;
pub mod forms;
pub mod messages;
pub mod store;

pub use store::{HrState, HrStore, Resource, StoreEvent, Tab};
