//! Message handlers of the model, one file per message family.

mod focus;
mod help;
mod navigation;
mod page;
mod popup;
mod theme;
