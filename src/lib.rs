//! devfolio - GitHub portfolio sync.
//!
//! Fetches a developer's public profile and repositories from the GitHub
//! API on a fixed refresh cadence and derives the filtered, sorted,
//! statistics-annotated view the presentation layer renders.

pub mod config;
pub mod fetcher;
pub mod github;
pub mod models;
pub mod readme;
pub mod state;
pub mod view_model;
