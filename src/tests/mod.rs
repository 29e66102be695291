pub mod connections;
pub mod utils;
