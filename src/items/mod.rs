//! Items Module
//!
//! The single stateful unit of the service: an ordered in-memory collection
//! of labeled items with create/list/merge-update/delete semantics, plus the
//! HTTP handlers and routes that expose it.
//!
//! # Semantics
//!
//! - Items keep insertion order; list responses expose that order.
//! - `id` is caller-supplied and deliberately not checked for uniqueness;
//!   update and delete resolve to the first match in collection order.
//! - Updates merge: only fields present in the request body overwrite the
//!   stored value, and an explicit `null` clears `description`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use verkstad::items;
//!
//! let app = Router::new()
//!     .merge(items::routes())
//!     .with_state(app_state);
//! ```

mod handler;
mod lib;
mod routes;

pub use lib::*;
pub use routes::routes;
