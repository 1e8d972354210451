pub mod hierarchy;

pub use hierarchy::{Hierarchy, ROOT_LOGGER_NAME};
