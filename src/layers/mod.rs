pub mod marker;
pub mod registry;
