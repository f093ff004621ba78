//! Paging service module
//!
//! Fetches one page of the "most popular" listing: builds the request, runs it
//! through a `Transport`, decodes the payload. Stateless, so one instance can
//! be shared by any number of callers.

mod show_service;

pub use show_service::{ShowService, ShowServicing};

#[cfg(test)]
mod tests;
