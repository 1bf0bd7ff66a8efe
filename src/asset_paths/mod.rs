//! Path primitives shared by the asset link resolver.
//!
//! Joining, separator normalisation and extension extraction are split into focused
//! submodules so each rule can be tested on its own. Every helper works on plain `/`
//! separated strings rather than `std::path`, because the output ends up in URLs.

mod extension;
mod join;

pub use extension::file_extension;
pub use join::{join_paths, prepend_forward_slash, slash};
