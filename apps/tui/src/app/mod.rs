// App module for base_bharat
// Owns the site state and turns key presses into site actions

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::App;
