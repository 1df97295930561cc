mod assets;
mod game;
mod info;

pub use game::GameWindow;
pub use info::InfoWindow;
