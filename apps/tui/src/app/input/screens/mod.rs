use crate::app::state::App;
use base_bharat_core::Route;
use crossterm::event::KeyCode;

mod document;
mod help;
mod leaderboard;
mod navigation;
mod not_found;
mod pledge_wall;

/// Routes a key press to the first layer that wants it: overlays first,
/// then text entry, then global shortcuts, then the current page.
pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if app.goto_input.is_some() {
        navigation::handle_goto_input(app, key);
        return;
    }

    if app.site.is_menu_open() {
        navigation::handle_menu_input(app, key);
        return;
    }

    if *app.route() == Route::PledgeWall && pledge_wall::handle_captured_input(app, key) {
        return;
    }

    if help::handle_animation_toggle(app, key) || navigation::handle_global_input(app, key) {
        return;
    }

    match app.route().clone() {
        Route::Home | Route::ObstacleCourse => document::handle_scroll_input(app, key),
        Route::GlobalLeaderboard => leaderboard::handle_leaderboard_input(app, key),
        Route::PledgeWall => pledge_wall::handle_pledge_wall_input(app, key),
        Route::NotFound(_) => not_found::handle_not_found_input(app, key),
    }
}
