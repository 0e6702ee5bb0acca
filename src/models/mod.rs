// Models module for taskpad
// All fields use camelCase for consistency

pub mod common;
pub mod task;

pub use common::{Filter, Priority};
pub use task::Task;
