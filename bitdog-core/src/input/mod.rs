//! Button input handling

pub mod debounce;
pub mod events;

pub use debounce::Debouncer;
pub use events::{Button, StatusLed};
