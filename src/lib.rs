//! # preen
//!
//! A trim-strings middleware for HTTP form input.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! Your framework parses requests: it reads bodies, decodes queries, and
//! flattens nested payloads into field names. preen does not — by design.
//! The framework does framework things. preen answers exactly one question
//! per field: *should this value keep its surrounding whitespace?*
//!
//! What the host framework owns — preen intentionally ignores:
//!
//! - **Parsing** — bodies, queries, multipart, JSON
//! - **Payload traversal** — nested structures are flattened into field
//!   names (dot-paths or flat keys, the host's choice) before preen sees them
//! - **Pipeline composition** — where in the middleware chain trimming runs
//!
//! What's left for preen — the only part that changes between applications:
//!
//! - [`TrimExceptions`] — the declarative list of field names to leave alone
//! - [`TrimStrings`] — the middleware that trims everything else
//! - [`ExceptionPolicy`] / [`Trimming`] — the seams, so either side can be
//!   swapped out
//!
//! ## Quick start
//!
//! ```rust
//! use std::collections::HashMap;
//! use preen::{TrimExceptions, TrimStrings, Trimming};
//!
//! let trim = TrimStrings::new(TrimExceptions::new(["password_confirmation"]));
//!
//! let mut form = HashMap::new();
//! form.insert("email".to_owned(), "  alice@example.com ".to_owned());
//! form.insert("password_confirmation".to_owned(), " hunter2 ".to_owned());
//!
//! let form = trim.trim(form);
//! assert_eq!(form["email"], "alice@example.com");
//! assert_eq!(form["password_confirmation"], " hunter2 ");
//! ```

mod policy;

pub mod middleware;

pub use middleware::{TrimStrings, Trimming};
pub use policy::{ExceptionPolicy, TrimExceptions};
