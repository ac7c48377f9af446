pub mod args;
pub mod executor;
pub mod isolation;
pub mod logger;
pub mod registry;
