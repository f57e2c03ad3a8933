pub mod env;
pub mod target;
