pub mod help;
pub mod home;
pub mod leaderboard;
pub mod not_found;
pub mod obstacle_course;
pub mod pledge_wall;
