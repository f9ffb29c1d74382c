// SPDX-License-Identifier: MPL-2.0
//! In-memory model of the page the i18n layer binds to: its address and its
//! element tree.

pub mod document;
pub mod location;

pub use document::{Document, Element};
pub use location::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub location: Location,
    pub document: Document,
}

impl Page {
    pub fn new(location: Location, document: Document) -> Self {
        Self { location, document }
    }
}
