pub mod assets;
pub mod collision;
pub mod combat;
pub mod compute;
pub mod entities;
pub mod game;
pub mod platform;
pub mod scene;

/// Logical canvas size. Every position in the game is expressed in these units.
pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = 800;
