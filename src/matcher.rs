//! Backtracking lookup over a [`Trie`].
//!
//! At every node the candidates are tried in a fixed order: a literal
//! child, then the param child, then the wildcard child. A branch that
//! fails hands control back to the next candidate. Captures are pushed
//! while unwinding from a successful match only, so values seen on an
//! abandoned branch never reach the result.

use crate::path::{next_segment, Path};
use crate::trie::{Trie, TrieNode};
use crate::{Route, RouterOptions};

impl<T> Trie<T> {
    /// Returns the matching route and its captured values in pattern
    /// declaration order.
    pub(crate) fn search<'trie, 'path>(
        &'trie self,
        path: &Path<'path>,
        options: &RouterOptions,
    ) -> Option<(&'trie Route<T>, Vec<&'path str>)> {
        #[cfg(feature = "log")]
        log::trace!("{:?}", path.str);

        let mut captures = vec![];
        self.root
            .search(path.segments, &mut captures, options)
            .map(|route| {
                captures.reverse();
                (route, captures)
            })
    }
}

impl<T> TrieNode<T> {
    fn search<'trie, 'path>(
        &'trie self,
        rest: Option<&'path str>,
        captures: &mut Vec<&'path str>,
        options: &RouterOptions,
    ) -> Option<&'trie Route<T>> {
        let Some(rest) = rest else {
            if let Some(route) = &self.route {
                return Some(route);
            }

            return match &self.wildcard {
                Some(wildcard) if options.allows_empty_wildcard() => {
                    captures.push("");
                    Some(&wildcard.route)
                }
                _ => None,
            };
        };

        #[cfg(feature = "log")]
        log::trace!("{rest:?}, {self:?}");

        let (segment, remainder) = next_segment(rest);

        if let Some(route) = self
            .literals
            .get(segment)
            .and_then(|child| child.search(remainder, captures, options))
        {
            return Some(route);
        }

        if !segment.is_empty() {
            if let Some(param) = &self.param {
                if let Some(route) = param.node.search(remainder, captures, options) {
                    captures.push(segment);
                    return Some(route);
                }
            }
        }

        if let Some(wildcard) = &self.wildcard {
            if !rest.is_empty() || options.allows_empty_wildcard() {
                captures.push(rest);
                return Some(&wildcard.route);
            }
        }

        None
    }
}
