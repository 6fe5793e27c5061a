pub mod charts;
pub mod document;
pub mod layout;
pub mod palette;
pub mod popup;
pub mod starfield;
