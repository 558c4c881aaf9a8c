/// A request path to be tested against the router.
///
/// `segments` is the path without its query string and leading slash, or
/// None for the root path. Empty segments are never collapsed: `/a//b`
/// walks `a`, ``, `b`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Path<'a> {
    #[cfg_attr(not(feature = "log"), allow(dead_code))]
    pub(crate) str: &'a str,
    pub(crate) segments: Option<&'a str>,
}

impl<'a> From<&'a str> for Path<'a> {
    fn from(str: &'a str) -> Self {
        #[cfg(feature = "memchr")]
        let end = memchr::memchr2(b'?', b'#', str.as_bytes());
        #[cfg(not(feature = "memchr"))]
        let end = str.find(['?', '#']);

        let path = end.map_or(str, |end| &str[..end]);
        let trimmed = path.strip_prefix('/').unwrap_or(path);

        Self {
            str,
            segments: if trimmed.is_empty() {
                None
            } else {
                Some(trimmed)
            },
        }
    }
}

/// splits the next segment off `rest`, returning None for the remainder
/// when this was the last segment
#[inline]
pub(crate) fn next_segment(rest: &str) -> (&str, Option<&str>) {
    #[cfg(feature = "memchr")]
    let index = memchr::memchr(b'/', rest.as_bytes());
    #[cfg(not(feature = "memchr"))]
    let index = rest.find('/');

    match index {
        Some(index) => (&rest[..index], Some(&rest[index + 1..])),
        None => (rest, None),
    }
}
