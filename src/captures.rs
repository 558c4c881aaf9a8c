use smartcow::SmartCow;
use std::ops::Deref;

/// A single named value extracted from a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture<'key, 'value> {
    key: SmartCow<'key>,
    value: SmartCow<'value>,
}

impl<'key, 'value> Capture<'key, 'value> {
    pub fn new(key: impl Into<SmartCow<'key>>, value: impl Into<SmartCow<'value>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn into_owned(self) -> Capture<'static, 'static> {
        Capture {
            key: self.key.into_owned(),
            value: self.value.into_owned(),
        }
    }
}

/// Captured params and wildcard, in the order the pattern declares them
///
/// A wildcard is stored like any other capture, under its own name. It
/// is always the last entry, and is additionally reachable through
/// [`Captures::wildcard`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Captures<'keys, 'values> {
    params: Vec<Capture<'keys, 'values>>,
    wildcard: bool,
}

impl<'keys, 'values> Captures<'keys, 'values> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            params: Vec::with_capacity(capacity),
            wildcard: false,
        }
    }

    pub fn into_owned(self) -> Captures<'static, 'static> {
        Captures {
            params: self.params.into_iter().map(Capture::into_owned).collect(),
            wildcard: self.wildcard,
        }
    }

    pub fn params(&self) -> &[Capture<'keys, 'values>] {
        &self.params[..]
    }

    pub fn push(&mut self, capture: Capture<'keys, 'values>) {
        self.params.push(capture);
    }

    pub(crate) fn push_wildcard(&mut self, capture: Capture<'keys, 'values>) {
        self.params.push(capture);
        self.wildcard = true;
    }

    /// returns what the wildcard matched, if the route ends in one
    pub fn wildcard(&self) -> Option<&str> {
        if self.wildcard {
            self.params.last().map(Capture::value)
        } else {
            None
        }
    }

    /// the value captured under `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|capture| capture.name() == name)
            .map(Capture::value)
    }
}

impl<'keys, 'values> Deref for Captures<'keys, 'values> {
    type Target = Vec<Capture<'keys, 'values>>;

    fn deref(&self) -> &Self::Target {
        &self.params
    }
}
