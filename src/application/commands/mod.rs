pub mod movie_commands;
pub mod view_commands;

pub use movie_commands::*;
pub use view_commands::*;
