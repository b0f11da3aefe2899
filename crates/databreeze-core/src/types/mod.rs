//! Key types used to describe a descent through nested records.

pub mod key;
pub mod path;

pub use key::{resolve_index, Key};
pub use path::KeyPath;
