use smartstring::alias::String;
use std::fmt::{self, Display, Formatter};

/// One slash-delimited position of a [`Pattern`](crate::Pattern)
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum Segment {
    /// matches this exact text
    Literal(String),
    /// matches any single non-empty segment, captured under this name
    Param(String),
    /// matches the rest of the path, captured under this name. only
    /// valid as the final segment
    Wildcard(String),
}

impl Segment {
    /// the capture name for params and wildcards
    pub fn name(&self) -> Option<&str> {
        match self {
            Segment::Literal(_) => None,
            Segment::Param(name) | Segment::Wildcard(name) => Some(name),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Literal(s) => f.write_str(s),
            Segment::Param(p) => f.write_fmt(format_args!(":{p}")),
            Segment::Wildcard(w) => f.write_fmt(format_args!("*{w}")),
        }
    }
}
