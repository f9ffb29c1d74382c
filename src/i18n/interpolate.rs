// SPDX-License-Identifier: MPL-2.0
//! `{name}` placeholder substitution.
//!
//! A placeholder is a run of ASCII letters, digits or `_` inside one pair of
//! braces. Substitution is a single pass; inserted values are not re-scanned,
//! so interpolating an already interpolated string is not guaranteed to be a
//! no-op.

use std::borrow::Cow;
use std::fmt::Display;

/// Values for placeholders, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the value bound to `name`.
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        let name = name.into();
        let value = value.to_string();
        match self.values.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.values.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Display, const N: usize> From<[(K, V); N]> for Params {
    fn from(pairs: [(K, V); N]) -> Self {
        let mut params = Params::new();
        for (name, value) in pairs {
            params.insert(name, value);
        }
        params
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replaces every `{name}` in `template` with its value from `params`.
///
/// Without params the template is returned as is. With params, a
/// placeholder that has no value becomes the empty string.
pub fn interpolate<'a>(template: &'a str, params: Option<&Params>) -> Cow<'a, str> {
    let Some(params) = params else {
        return Cow::Borrowed(template);
    };
    if !template.contains('{') {
        return Cow::Borrowed(template);
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let name_len = after.find(|c: char| !is_name_char(c)).unwrap_or(after.len());

        if name_len > 0 && after[name_len..].starts_with('}') {
            out.push_str(params.get(&after[..name_len]).unwrap_or(""));
            rest = &after[name_len + 1..];
        } else {
            out.push('{');
            rest = after;
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
