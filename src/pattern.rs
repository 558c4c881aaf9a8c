use crate::{RouteError, Segment};
use smartstring::alias::String as SmartString;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Trieroute's representation of a parsed route template
///
/// This contains an optional source string and an ordered sequence of
/// [`Segment`]s. Every `Pattern` upholds two invariants: capture names
/// are unique, and a [`Segment::Wildcard`] can only be the final segment.
#[derive(Eq, Debug, Clone)]
pub struct Pattern {
    source: Option<SmartString>,
    segments: Vec<Segment>,
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }

        for segment in &self.segments {
            f.write_fmt(format_args!("/{segment}"))?;
        }
        Ok(())
    }
}

impl Pattern {
    /// Retrieve a reference to the original route template, if this
    /// pattern was parsed from a string representation. If this
    /// pattern was created another way, this will return None.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Slice accessor for the component [`Segment`]s in this Pattern
    pub fn segments(&self) -> &[Segment] {
        self.segments.as_slice()
    }

    /// capture names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(Segment::name)
    }

    pub fn ends_with_wildcard(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_wildcard)
    }

    fn validated(source: Option<&str>, segments: Vec<Segment>) -> Result<Self, RouteError> {
        let describe = || match source {
            Some(source) => source.to_string(),
            None => Pattern::render(&segments),
        };

        if let Some(reason) = segments.iter().find_map(check_segment) {
            return Err(RouteError::invalid(&describe(), reason));
        }

        if let Some(position) = segments.iter().position(Segment::is_wildcard) {
            if position + 1 != segments.len() {
                return Err(RouteError::invalid(
                    &describe(),
                    format!(
                        "wildcard `{}` must be the final segment",
                        segments[position]
                    ),
                ));
            }
        }

        let names: Vec<&str> = segments.iter().filter_map(Segment::name).collect();
        for (index, name) in names.iter().enumerate() {
            if names[..index].contains(name) {
                return Err(RouteError::invalid(
                    &describe(),
                    format!("`{name}` is captured more than once"),
                ));
            }
        }

        Ok(Self {
            source: source.map(SmartString::from),
            segments,
        })
    }

    fn render(segments: &[Segment]) -> String {
        Pattern {
            source: None,
            segments: segments.to_vec(),
        }
        .to_string()
    }
}

/// `/` separates segments, and `?` and `#` end the path of a request
/// target, so a literal holding one of them could never match
fn check_segment(segment: &Segment) -> Option<String> {
    const LITERAL: &[char] = &['/', '?', '#'];
    const NAME: &[char] = &['/', '?', '#', ':', '*', '{', '}'];

    let (kind, text, forbidden) = match segment {
        Segment::Literal(text) => ("literal", text.as_str(), LITERAL),
        Segment::Param(name) => ("param", name.as_str(), NAME),
        Segment::Wildcard(name) => ("wildcard", name.as_str(), NAME),
    };

    if text.is_empty() && !matches!(segment, Segment::Literal(_)) {
        return Some(format!("{kind}s must be named"));
    }

    text.chars()
        .find(|c| forbidden.contains(c))
        .map(|c| match segment {
            Segment::Literal(_) => format!("literal `{text}` cannot contain `{c}`"),
            _ => format!("{kind} name `{text}` cannot contain `{c}`"),
        })
}

fn parse_section(source: &str, section: &str) -> Result<Segment, RouteError> {
    let segment = match section.as_bytes().first() {
        Some(b':') => Segment::Param(SmartString::from(&section[1..])),
        Some(b'*') => Segment::Wildcard(SmartString::from(&section[1..])),
        Some(b'{') if section.len() > 1 && section.ends_with('}') => {
            Segment::Param(SmartString::from(&section[1..section.len() - 1]))
        }
        _ if section.contains(['{', '}']) => {
            return Err(RouteError::invalid(
                source,
                format!("`{section}`: params must span a whole segment"),
            ));
        }
        _ => Segment::Literal(SmartString::from(section)),
    };

    Ok(segment)
}

impl FromStr for Pattern {
    type Err = RouteError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        let trimmed = source.strip_prefix('/').unwrap_or(source);

        let segments = if trimmed.is_empty() {
            vec![]
        } else {
            trimmed
                .split('/')
                .map(|section| parse_section(source, section))
                .collect::<Result<Vec<_>, _>>()?
        };

        Self::validated(Some(source), segments)
    }
}

impl TryFrom<&str> for Pattern {
    type Error = RouteError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for Pattern {
    type Error = RouteError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<Vec<Segment>> for Pattern {
    type Error = RouteError;

    fn try_from(segments: Vec<Segment>) -> Result<Self, Self::Error> {
        Self::validated(None, segments)
    }
}
