// SPDX-License-Identifier: MPL-2.0
//! `brenon_cloud` is the internationalization layer of the Brenon.Cloud site.
//!
//! It resolves translation keys with fallback to English, interpolates
//! `{name}` placeholders, detects and persists the visitor's locale, and
//! binds translations into a headless model of the page.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
pub mod site;
