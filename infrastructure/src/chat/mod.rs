//! Chat launcher adapter

mod launcher;

pub use launcher::CommandChatLauncher;
