//! Web layer for browser-facing HTML pages.
//!
//! Provides the home listing page and the suggestion 404 page.
//! Uses Askama templates for server-side rendering; a template that fails
//! to render degrades to a generic 500.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers

pub mod handlers;
