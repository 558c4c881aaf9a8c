use crate::{Method, Pattern, Route, RouteError, Segment};
use smartstring::alias::String;
use std::collections::BTreeMap;

/// One method's routes, keyed by path segment
#[derive(Clone)]
pub(crate) struct Trie<T> {
    method: Method,
    pub(crate) root: TrieNode<T>,
    len: usize,
}

#[derive(Clone)]
pub(crate) struct TrieNode<T> {
    pub(crate) literals: BTreeMap<String, TrieNode<T>>,
    pub(crate) param: Option<Box<ParamChild<T>>>,
    pub(crate) wildcard: Option<Box<WildcardChild<T>>>,
    pub(crate) route: Option<Route<T>>,
}

#[derive(Clone)]
pub(crate) struct ParamChild<T> {
    pub(crate) name: String,
    pub(crate) node: TrieNode<T>,
}

/// wildcards always end a pattern, so they hold a route rather than a node
#[derive(Clone)]
pub(crate) struct WildcardChild<T> {
    pub(crate) name: String,
    pub(crate) route: Route<T>,
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        Self {
            literals: BTreeMap::new(),
            param: None,
            wildcard: None,
            route: None,
        }
    }
}

impl<T> std::fmt::Debug for Trie<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("method", &self.method)
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T> std::fmt::Debug for TrieNode<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        if let Some(route) = &self.route {
            map.entry(&"", &format_args!("{}", route.definition()));
        }

        for (key, value) in &self.literals {
            map.entry(key, value);
        }

        if let Some(param) = &self.param {
            map.entry(&format_args!(":{}", param.name), &param.node);
        }

        if let Some(wildcard) = &self.wildcard {
            map.entry(
                &format_args!("*{}", wildcard.name),
                &format_args!("{}", wildcard.route.definition()),
            );
        }

        map.finish()
    }
}

enum Conflict {
    Duplicate,
    Ambiguous { name: String, existing: String },
}

impl Conflict {
    fn into_error(self, method: Method, pattern: &Pattern) -> RouteError {
        match self {
            Conflict::Duplicate => RouteError::Conflict {
                method,
                pattern: pattern.to_string(),
            },
            Conflict::Ambiguous { name, existing } => RouteError::AmbiguousParam {
                method,
                pattern: pattern.to_string(),
                name: name.into(),
                existing: existing.into(),
            },
        }
    }
}

impl<T> Trie<T> {
    pub(crate) fn new(method: Method) -> Self {
        Self {
            method,
            root: TrieNode::default(),
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Adds a route. The insert path is checked before any node is
    /// created, so a rejected pattern leaves the trie untouched.
    pub(crate) fn insert(&mut self, pattern: Pattern, handler: T) -> Result<(), RouteError> {
        if let Err(conflict) = self.root.check(pattern.segments()) {
            let error = conflict.into_error(self.method, &pattern);
            #[cfg(feature = "log")]
            log::warn!("rejecting route: {error}");
            return Err(error);
        }

        #[cfg(feature = "log")]
        log::debug!("registering {} {pattern}", self.method);

        self.root.insert(Route::new(pattern, handler), 0);
        self.len += 1;
        Ok(())
    }

    /// every route in this trie, literals before params before wildcards
    pub(crate) fn routes(&self) -> Vec<&Route<T>> {
        let mut routes = Vec::with_capacity(self.len);
        self.root.collect(&mut routes);
        routes
    }
}

impl<T> TrieNode<T> {
    fn check(&self, segments: &[Segment]) -> Result<(), Conflict> {
        let Some((segment, rest)) = segments.split_first() else {
            return match self.route {
                Some(_) => Err(Conflict::Duplicate),
                None => Ok(()),
            };
        };

        match segment {
            Segment::Literal(text) => match self.literals.get(text.as_str()) {
                Some(child) => child.check(rest),
                None => Ok(()),
            },

            Segment::Param(name) => match &self.param {
                Some(param) if param.name != *name => Err(Conflict::Ambiguous {
                    name: name.clone(),
                    existing: param.name.clone(),
                }),
                Some(param) => param.node.check(rest),
                None => Ok(()),
            },

            Segment::Wildcard(name) => match &self.wildcard {
                Some(wildcard) if wildcard.name != *name => Err(Conflict::Ambiguous {
                    name: name.clone(),
                    existing: wildcard.name.clone(),
                }),
                Some(_) => Err(Conflict::Duplicate),
                None => Ok(()),
            },
        }
    }

    fn insert(&mut self, route: Route<T>, depth: usize) {
        let Some(segment) = route.segments().get(depth) else {
            self.route = Some(route);
            return;
        };

        match segment {
            Segment::Literal(text) => self
                .literals
                .entry(text.clone())
                .or_default()
                .insert(route, depth + 1),

            Segment::Param(name) => self
                .param
                .get_or_insert_with(|| {
                    Box::new(ParamChild {
                        name: name.clone(),
                        node: TrieNode::default(),
                    })
                })
                .node
                .insert(route, depth + 1),

            Segment::Wildcard(name) => {
                self.wildcard = Some(Box::new(WildcardChild {
                    name: name.clone(),
                    route,
                }))
            }
        }
    }

    fn collect<'trie>(&'trie self, routes: &mut Vec<&'trie Route<T>>) {
        routes.extend(&self.route);

        for child in self.literals.values() {
            child.collect(routes);
        }

        if let Some(param) = &self.param {
            param.node.collect(routes);
        }

        if let Some(wildcard) = &self.wildcard {
            routes.push(&wildcard.route);
        }
    }
}
