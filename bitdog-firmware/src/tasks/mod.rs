//! Embassy async tasks
//!
//! Tasks share the panel through [`SharedPanel`](crate::board::SharedPanel);
//! each input event holds the lock until its display update is flushed.

pub mod buttons;
pub mod console;
pub mod usb;

pub use buttons::button_task;
pub use console::console_task;
pub use usb::{usb_console_task, usb_device_task};
