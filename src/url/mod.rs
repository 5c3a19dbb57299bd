//! URL handling module for Keyword-Ripple
//!
//! This module maps search-hit URLs to the domain keys used for clustering.

mod domain;

pub use domain::{domain_key, extract_domain};
