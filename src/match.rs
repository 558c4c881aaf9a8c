use std::fmt::{self, Debug, Formatter};
use std::ops::Deref;

use crate::{AllowedMethods, Capture, Captures, Method, Pattern, Route, Segment};

/// This struct represents the output of a successful application of a
/// [`Route`] to a str path, as well as references to any captures
/// such as params and wildcards. It dereferences to the contained type T
pub struct Match<'router, 'path, T> {
    method: Method,
    path: &'path str,
    route: &'router Route<T>,
    captures: Vec<&'path str>,
}

impl<'router, 'path, T> Match<'router, 'path, T> {
    pub(crate) fn new(
        method: Method,
        path: &'path str,
        route: &'router Route<T>,
        captures: Vec<&'path str>,
    ) -> Self {
        Self {
            method,
            path,
            route,
            captures,
        }
    }

    /// Returns a reference to the handler associated with this route
    pub fn handler(&self) -> &'router T {
        self.route.handler()
    }

    pub fn route(&self) -> &'router Pattern {
        self.route.definition()
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// the path exactly as it was passed to the router
    pub fn path(&self) -> &'path str {
        self.path
    }

    /// Returns the [`Captures`] for this match
    pub fn captures(&self) -> Captures<'router, 'path> {
        self.route
            .segments()
            .iter()
            .filter(|s| matches!(s, Segment::Param(_) | Segment::Wildcard(_)))
            .zip(&self.captures)
            .fold(
                Captures::with_capacity(self.captures.len()),
                |mut captures, (segment, capture)| {
                    match segment {
                        Segment::Param(name) => captures.push(Capture::new(&**name, *capture)),
                        Segment::Wildcard(name) => {
                            captures.push_wildcard(Capture::new(&**name, *capture))
                        }
                        Segment::Literal(_) => {}
                    }
                    captures
                },
            )
    }
}

impl<T> Debug for Match<'_, '_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("route", &self.route)
            .field("captures", &self.captures)
            .finish()
    }
}

impl<'router, 'path, T> Deref for Match<'router, 'path, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.route.handler()
    }
}

/// The outcome of [`Router::lookup`](crate::Router::lookup)
///
/// None of these are errors: an http adapter is expected to turn
/// `NotFound` into a 404 and `MethodNotAllowed` into a 405 with an
/// `Allow` header.
pub enum Lookup<'router, 'path, T> {
    /// a route is registered for this method and path
    Found(Match<'router, 'path, T>),

    /// the path is only registered under these other methods
    MethodNotAllowed(AllowedMethods),

    /// no method has a route for this path
    NotFound,
}

impl<'router, 'path, T> Lookup<'router, 'path, T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// the [`Match`], if there was one
    pub fn found(self) -> Option<Match<'router, 'path, T>> {
        match self {
            Lookup::Found(m) => Some(m),
            _ => None,
        }
    }
}

impl<T> Debug for Lookup<'_, '_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Found(m) => f.debug_tuple("Found").field(m).finish(),
            Lookup::MethodNotAllowed(allowed) => {
                f.debug_tuple("MethodNotAllowed").field(allowed).finish()
            }
            Lookup::NotFound => f.write_str("NotFound"),
        }
    }
}
