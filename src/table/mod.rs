pub mod fields;
pub mod presenter;
pub mod render;
