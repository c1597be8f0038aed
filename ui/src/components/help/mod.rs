mod content;
mod rendering;

pub use content::{HelpContent, HelpSection, Shortcut};
pub use rendering::HelpRenderer;
