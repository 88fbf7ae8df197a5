//! Shared building blocks for the bulletin-board service.
//!
//! Everything in this crate is free of I/O: pagination markup, sort links,
//! `<select>` builders and the one-time token store are plain functions and
//! values that the API layer feeds with data it has already loaded.

pub mod html;
pub mod paging;
pub mod params;
pub mod sort;
pub mod token;
pub mod views;

pub use paging::{PagingConfig, PagingRequest, build_paging_links, normalize_page};
pub use sort::{SortOrder, SortState, subject_sort_link};
pub use token::{TokenError, TokenStore};
