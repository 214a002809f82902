//! Navigation history engine.
//!
//! # Modules
//!
//! - `list`: Arena-backed doubly linked list of visited pages
//! - `url`: Token resolution into `UrlRecord`s and route assembly
//! - `navigator`: The BACK/FORWARD/visit state machine and route log
//!
//! # Example
//!
//! ```
//! use navreplay::history::navigator::Navigator;
//!
//! let mut navigator = Navigator::new();
//! for line in ["https://a.com/x", "y", "BACK"] {
//!     navigator.apply_line(line);
//! }
//! assert_eq!(
//!     navigator.finish(),
//!     vec!["https://a.com/x", "https://a.com/x/y", "https://a.com/x"]
//! );
//! ```

pub mod list;
pub mod navigator;
pub mod url;
