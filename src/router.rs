use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};

use crate::{
    trie::Trie, AllowedMethods, Lookup, Match, Method, Path, Pattern, Route, RouteError,
    RouterOptions, Service,
};

/// The route table: one segment trie per http method.
///
/// Routes are added with `&mut self` and looked up with `&self`, so once a
/// router is shared between threads (behind an `Arc`, or a
/// [`LiveRouter`](crate::LiveRouter)) it can no longer change.
#[derive(Clone)]
pub struct Router<T> {
    tries: BTreeMap<Method, Trie<T>>,
    options: RouterOptions,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::with_options(RouterOptions::default())
    }
}

impl<T> Debug for Router<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.tries.iter().map(|(method, trie)| (method, &trie.root)))
            .finish()
    }
}

impl<T> Router<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RouterOptions) -> Self {
        Self {
            tries: BTreeMap::new(),
            options,
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Adds a route, creating the trie for `method` on first use.
    ///
    /// Fails without modifying the router if the pattern does not parse,
    /// is already registered for this method, or puts a param or wildcard
    /// at a position another name already holds.
    pub fn register<M, P>(&mut self, method: M, pattern: P, handler: T) -> Result<(), RouteError>
    where
        M: TryInto<Method>,
        P: TryInto<Pattern>,
        RouteError: From<M::Error> + From<P::Error>,
    {
        self.insert(method.try_into()?, pattern.try_into()?, handler)
    }

    fn insert(&mut self, method: Method, pattern: Pattern, handler: T) -> Result<(), RouteError> {
        self.tries
            .entry(method)
            .or_insert_with(|| Trie::new(method))
            .insert(pattern, handler)
    }

    pub fn get<P>(&mut self, pattern: P, handler: T) -> Result<(), RouteError>
    where
        P: TryInto<Pattern>,
        RouteError: From<P::Error>,
    {
        self.insert(Method::Get, pattern.try_into()?, handler)
    }

    pub fn post<P>(&mut self, pattern: P, handler: T) -> Result<(), RouteError>
    where
        P: TryInto<Pattern>,
        RouteError: From<P::Error>,
    {
        self.insert(Method::Post, pattern.try_into()?, handler)
    }

    pub fn put<P>(&mut self, pattern: P, handler: T) -> Result<(), RouteError>
    where
        P: TryInto<Pattern>,
        RouteError: From<P::Error>,
    {
        self.insert(Method::Put, pattern.try_into()?, handler)
    }

    pub fn patch<P>(&mut self, pattern: P, handler: T) -> Result<(), RouteError>
    where
        P: TryInto<Pattern>,
        RouteError: From<P::Error>,
    {
        self.insert(Method::Patch, pattern.try_into()?, handler)
    }

    pub fn delete<P>(&mut self, pattern: P, handler: T) -> Result<(), RouteError>
    where
        P: TryInto<Pattern>,
        RouteError: From<P::Error>,
    {
        self.insert(Method::Delete, pattern.try_into()?, handler)
    }

    /// Finds the route for `method` and `path`.
    ///
    /// When `method` has no matching route, the other methods are
    /// consulted to tell [`Lookup::MethodNotAllowed`] apart from
    /// [`Lookup::NotFound`].
    pub fn lookup<'a, 'b>(&'a self, method: Method, path: &'b str) -> Lookup<'a, 'b, T> {
        let parsed = Path::from(path);

        if let Some((route, captures)) = self
            .tries
            .get(&method)
            .and_then(|trie| trie.search(&parsed, &self.options))
        {
            return Lookup::Found(Match::new(method, path, route, captures));
        }

        let allowed = self.allowed(&parsed, Some(method));
        if allowed.is_empty() {
            #[cfg(feature = "log")]
            log::trace!("{method} {path}: not found");
            Lookup::NotFound
        } else {
            #[cfg(feature = "log")]
            log::trace!("{method} {path}: allowed methods are {allowed}");
            Lookup::MethodNotAllowed(allowed)
        }
    }

    /// Every method with a route matching `path`
    pub fn allowed_methods(&self, path: &str) -> AllowedMethods {
        self.allowed(&Path::from(path), None)
    }

    fn allowed(&self, path: &Path<'_>, except: Option<Method>) -> AllowedMethods {
        self.tries
            .iter()
            .filter(|(method, _)| Some(**method) != except)
            .filter(|(_, trie)| trie.search(path, &self.options).is_some())
            .map(|(method, _)| *method)
            .collect()
    }

    /// A dispatchable entry point for an http server adapter
    pub fn handler(&self) -> Service<'_, T> {
        Service::new(self)
    }

    /// All registered routes, grouped by method
    pub fn routes(&self) -> impl Iterator<Item = (Method, &Route<T>)> + '_ {
        self.tries
            .iter()
            .flat_map(|(method, trie)| trie.routes().into_iter().map(move |r| (*method, r)))
    }

    pub fn len(&self) -> usize {
        self.tries.values().map(Trie::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
