mod component;
mod snippets;
mod steps;
mod types;

pub use component::SortingVisualizer;
