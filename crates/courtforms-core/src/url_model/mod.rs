//! URL handling for document links: resolution against the site origin and
//! filename derivation.
//!
//! Derived filenames are used verbatim. There is no sanitization, decoding or
//! collision handling; two links with the same last segment write the same file.

mod path;
mod resolve;

pub use path::{derive_filename, last_path_segment};
pub use resolve::resolve_link;
