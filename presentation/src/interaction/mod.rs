//! Interactive terminal input

pub mod terminal_input;

pub use terminal_input::TerminalInput;
