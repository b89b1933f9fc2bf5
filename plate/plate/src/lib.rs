pub mod grid;
pub mod selection;
pub mod well;
