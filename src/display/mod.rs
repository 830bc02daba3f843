pub mod input;
pub mod renderer;
pub mod theme;
