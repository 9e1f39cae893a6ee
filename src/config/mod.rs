//! Configuration for progress-sync.
//!
//! Settings come from an optional `.progress-sync.yaml` in the working root.
//! Every field has a default, so a missing file (or an empty one) reproduces
//! the stock behaviour. Unknown fields are ignored for forward compatibility.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, CONFIG_FILE_NAME};
