// Formatting utilities

pub mod money;

pub use money::*;
