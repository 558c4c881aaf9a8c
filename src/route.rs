use crate::{Pattern, Segment};
use std::fmt::{self, Debug, Formatter};

/// A parsed [`Pattern`] and associated handler
#[derive(Clone)]
pub struct Route<T> {
    definition: Pattern,
    handler: T,
}

impl<T> Debug for Route<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("Route({})", &self.definition))
    }
}

impl<T> PartialEq for Route<T> {
    fn eq(&self, other: &Self) -> bool {
        self.definition == other.definition
    }
}

impl<T> Eq for Route<T> {}

impl<T> Route<T> {
    pub(crate) fn new(definition: Pattern, handler: T) -> Self {
        Self {
            definition,
            handler,
        }
    }

    /// the [`Pattern`] for this [`Route`]
    pub fn definition(&self) -> &Pattern {
        &self.definition
    }

    /// borrow whatever handler T is contained in this route
    pub fn handler(&self) -> &T {
        &self.handler
    }

    /// a slice of [`Pattern`] [`Segment`]s that represents this route
    pub fn segments(&self) -> &[Segment] {
        self.definition.segments()
    }
}
