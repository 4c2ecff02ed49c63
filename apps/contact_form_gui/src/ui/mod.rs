//! UI layer: the contact form screen and its widgets.

pub mod app;
pub mod widgets;

pub use app::ContactFormApp;
