//! Clipboard adapter

mod system;

pub use system::SystemClipboard;
