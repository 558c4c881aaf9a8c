/// Run-time matching policy for a [`Router`](crate::Router)
///
/// ```
/// use trieroute::{Router, RouterOptions};
/// let mut router = Router::with_options(RouterOptions::new().allow_empty_wildcard(true));
/// router.get("/files/*rest", ()).unwrap();
/// assert!(router.lookup(trieroute::Method::Get, "/files").is_found());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RouterOptions {
    allow_empty_wildcard: bool,
}

impl RouterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// When enabled, `/files/*rest` also matches `/files` and `/files/`,
    /// capturing `rest = ""`. By default a wildcard needs at least one
    /// character of remaining path.
    pub fn allow_empty_wildcard(mut self, allow: bool) -> Self {
        self.allow_empty_wildcard = allow;
        self
    }

    pub fn allows_empty_wildcard(&self) -> bool {
        self.allow_empty_wildcard
    }
}
