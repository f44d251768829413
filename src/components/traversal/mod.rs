mod component;
mod render;
mod steps;
mod types;

pub use component::TraversalCanvas;
