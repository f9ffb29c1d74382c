// SPDX-License-Identifier: MPL-2.0
//! The page address and its query string.

use crate::error::Result;
use url::Url;

/// Current page URL. Rewrites replace the address in place; they never add
/// a navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn parse(href: &str) -> Result<Self> {
        Ok(Self {
            url: Url::parse(href)?,
        })
    }

    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// First value of the query parameter `name`.
    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Sets `name` to `value`: the first occurrence is updated, later
    /// duplicates are dropped, and the parameter is appended when absent.
    /// Other parameters keep their order.
    pub fn replace_query_param(&mut self, name: &str, value: &str) {
        let mut pairs: Vec<(String, String)> = self.url.query_pairs().into_owned().collect();
        let mut seen = false;
        pairs.retain_mut(|(key, current)| {
            if key != name {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *current = value.to_string();
            true
        });
        if !seen {
            pairs.push((name.to_string(), value.to_string()));
        }

        self.url.query_pairs_mut().clear().extend_pairs(pairs.iter());
    }
}
