mod loop_handler;
pub mod snapshot;

pub use loop_handler::{handle_event, run, run_headless};
