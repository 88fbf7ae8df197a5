//! Bulletin-board API service.
//!
//! Serves the new-post feed, one-time tokens for state-changing requests and
//! admin menu definitions. Storage is injected through [`context::ApiContext`];
//! see [`config::BbsApiConfig`] for the available options.

pub mod config;
pub mod context;
pub mod request;
pub mod server;
pub mod theme;
pub mod uploads;
pub mod visit;

pub(crate) mod error;
pub(crate) mod handlers;
