//! Pattern validation for extracted artifacts.
//!
//! Translates a deliberately small glob dialect into an anchored regular
//! expression and checks it against every regular file below a root directory.
//!
//! # Supported syntax
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `**/` | zero or more leading directories |
//! | `**`  | any run of characters, `/` included |
//! | `*`   | any run of characters except `/` |
//! | `?`   | exactly one character except `/` |
//!
//! Everything else matches itself. There are no bracket classes, negation or
//! brace expansion: `[ab].md` only matches a file literally named `[ab].md`.
//!
//! # Example
//!
//! ```
//! use planrun_verify::GlobPattern;
//!
//! let pattern = GlobPattern::new("**/*.md").unwrap();
//! assert!(pattern.is_match("file.md"));
//! assert!(pattern.is_match("docs/sub/file.md"));
//! assert!(!pattern.is_match("docs/file.txt"));
//! ```

pub use self::error::{Error, Result};
pub use self::pattern::{GlobPattern, translate};
pub use self::validate::{find_matches, validate};
pub use self::walk::collect_files;

mod error;
mod pattern;
mod validate;
mod walk;
