//! Controller layer: UI events and the submit sink that feeds them.

pub mod events;
pub mod orchestration;
