//! The http-facing side of a [`Router`].
//!
//! A [`Service`] owns no listener and parses no bytes. Whatever server
//! sits in front of it passes a method and a request target in, along
//! with something implementing [`ResponseWriter`], and the service either
//! calls the matched [`Handler`] or answers 404 / 405 itself.

use http::{header, HeaderMap, HeaderValue, StatusCode};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::{AllowedMethods, Captures, Lookup, Method, Router};

/// Everything a [`Handler`] gets to see about the request it serves
#[derive(Debug)]
pub struct Request<'router, 'path> {
    method: Method,
    path: &'path str,
    captures: Captures<'router, 'path>,
}

impl<'router, 'path> Request<'router, 'path> {
    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &'path str {
        self.path
    }

    pub fn captures(&self) -> &Captures<'router, 'path> {
        &self.captures
    }

    /// the value captured for `name`, if the route declares it
    pub fn param(&self, name: &str) -> Option<&str> {
        self.captures.get(name)
    }
}

/// The response half of a request, as a handler sees it
pub trait ResponseWriter {
    fn set_status(&mut self, status: StatusCode);
    fn headers_mut(&mut self) -> &mut HeaderMap;
    fn write_body(&mut self, bytes: &[u8]);
}

impl ResponseWriter for http::Response<Vec<u8>> {
    fn set_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        http::Response::headers_mut(self)
    }

    fn write_body(&mut self, bytes: &[u8]) {
        self.body_mut().extend_from_slice(bytes);
    }
}

/// A [`ResponseWriter`] that keeps nothing but the status and the number
/// of body bytes written, for measuring dispatch without response costs
#[derive(Debug, Default)]
pub struct Discard {
    status: Option<StatusCode>,
    headers: HeaderMap,
    written: usize,
}

impl Discard {
    pub fn new() -> Self {
        Self::default()
    }

    /// the last status set, or 200 if none was
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl ResponseWriter for Discard {
    fn set_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    fn write_body(&mut self, bytes: &[u8]) {
        self.written += bytes.len();
    }
}

/// Something a route can dispatch to
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request<'_, '_>, response: &mut dyn ResponseWriter);
}

/// A [`Handler`] built from a closure, see [`handler_fn`]
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(F);

impl<F> Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("HandlerFn")
    }
}

/// Wraps a closure as a [`Handler`]
///
/// ```
/// use trieroute::{handler_fn, Request, ResponseWriter, Router};
/// let mut router = Router::new();
/// router
///     .get(
///         "/user/{name}",
///         handler_fn(|request: &Request<'_, '_>, response: &mut dyn ResponseWriter| {
///             response.write_body(request.param("name").unwrap_or_default().as_bytes())
///         }),
///     )
///     .unwrap();
/// ```
pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&Request<'_, '_>, &mut dyn ResponseWriter) + Send + Sync,
{
    HandlerFn(f)
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&Request<'_, '_>, &mut dyn ResponseWriter) + Send + Sync,
{
    fn handle(&self, request: &Request<'_, '_>, response: &mut dyn ResponseWriter) {
        (self.0)(request, response)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn handle(&self, request: &Request<'_, '_>, response: &mut dyn ResponseWriter) {
        (**self).handle(request, response)
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn handle(&self, request: &Request<'_, '_>, response: &mut dyn ResponseWriter) {
        (**self).handle(request, response)
    }
}

/// What a [`Service`] did with a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Handled,
    NotFound,
    MethodNotAllowed(AllowedMethods),
}

/// A borrowed, dispatchable view of a [`Router`] whose routes hold
/// [`Handler`]s. Obtained from [`Router::handler`].
pub struct Service<'router, T> {
    router: &'router Router<T>,
}

impl<T> Clone for Service<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Service<'_, T> {}

impl<T> Debug for Service<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Service").field(self.router).finish()
    }
}

impl<'router, T> Service<'router, T> {
    pub(crate) fn new(router: &'router Router<T>) -> Self {
        Self { router }
    }
}

impl<'router, T: Handler> Service<'router, T> {
    /// Dispatches one request. `target` is the request target as it
    /// appears on the request line; any query string is ignored for
    /// routing.
    ///
    /// Methods outside [`Method`] are answered with a 405 when some
    /// other method serves the path, and a 404 otherwise.
    pub fn serve(
        &self,
        method: &http::Method,
        target: &str,
        response: &mut dyn ResponseWriter,
    ) -> Outcome {
        let lookup = match Method::try_from(method) {
            Ok(method) => self.router.lookup(method, target),
            Err(_) => {
                let allowed = self.router.allowed_methods(target);
                if allowed.is_empty() {
                    Lookup::NotFound
                } else {
                    Lookup::MethodNotAllowed(allowed)
                }
            }
        };

        match lookup {
            Lookup::Found(m) => {
                let request = Request {
                    method: m.method(),
                    path: m.path(),
                    captures: m.captures(),
                };
                m.handler().handle(&request, response);
                Outcome::Handled
            }

            Lookup::NotFound => {
                response.set_status(StatusCode::NOT_FOUND);
                Outcome::NotFound
            }

            Lookup::MethodNotAllowed(allowed) => {
                response.set_status(StatusCode::METHOD_NOT_ALLOWED);
                if let Ok(value) = HeaderValue::from_str(&allowed.to_string()) {
                    response.headers_mut().insert(header::ALLOW, value);
                }
                Outcome::MethodNotAllowed(allowed)
            }
        }
    }

    /// [`Service::serve`] for an [`http::Request`]
    pub fn serve_request<B>(
        &self,
        request: &http::Request<B>,
        response: &mut dyn ResponseWriter,
    ) -> Outcome {
        self.serve(request.method(), request.uri().path(), response)
    }

    /// Dispatches into a fresh `http::Response` with a 200 status
    pub fn respond<B>(&self, request: &http::Request<B>) -> http::Response<Vec<u8>> {
        let mut response = http::Response::new(Vec::new());
        self.serve_request(request, &mut response);
        response
    }
}
