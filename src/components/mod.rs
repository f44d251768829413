pub mod playback;
pub mod sorting;
pub mod traversal;
