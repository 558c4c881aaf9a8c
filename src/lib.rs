//! # Trieroute
//!
//! A method-aware http path router. Each method gets its own trie keyed by
//! path segment; a lookup walks it literal-first, falling back to a param
//! and then to a wildcard, and backtracks when a branch dead-ends.
//!
//! ```
//! use trieroute::{Lookup, Method, Router};
//! let mut router = Router::new();
//! router.get("/user/{name}", 1)?;
//! router.get("/user/admin", 2)?;
//! router.post("/files/*path", 3)?;
//!
//! let m = router.lookup(Method::Get, "/user/gordon").found().unwrap();
//! assert_eq!(*m, 1);
//! assert_eq!(m.captures().get("name"), Some("gordon"));
//!
//! assert_eq!(*router.lookup(Method::Get, "/user/admin").found().unwrap(), 2);
//!
//! let m = router.lookup(Method::Post, "/files/a/b/c").found().unwrap();
//! assert_eq!(m.captures().wildcard(), Some("a/b/c"));
//!
//! assert!(matches!(
//!     router.lookup(Method::Get, "/files/a"),
//!     Lookup::MethodNotAllowed(allowed) if allowed.to_string() == "POST"
//! ));
//! assert!(matches!(router.lookup(Method::Get, "/nope"), Lookup::NotFound));
//! # Ok::<(), trieroute::RouteError>(())
//! ```
//!
//! Params are written `:name` or `{name}`, wildcards `*name`. A wildcard
//! must be the last segment, and by default matches at least one
//! character; see [`RouterOptions`].
#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    nonstandard_style
)]

mod captures;
mod error;
mod live;
mod r#match;
mod matcher;
mod method;
mod options;
mod path;
mod pattern;
mod route;
mod router;
mod segment;
mod service;
mod trie;

pub use captures::{Capture, Captures};
pub use error::RouteError;
pub use live::LiveRouter;
pub use method::{AllowedMethods, Method};
pub use options::RouterOptions;
pub(crate) use path::Path;
pub use pattern::Pattern;
pub use r#match::{Lookup, Match};
pub use route::Route;
pub use router::Router;
pub use segment::Segment;
pub use service::{
    handler_fn, Discard, Handler, HandlerFn, Outcome, Request, ResponseWriter, Service,
};
