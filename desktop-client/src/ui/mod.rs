mod colors;
mod game_ui;

pub use game_ui::ReversnakeApp;
