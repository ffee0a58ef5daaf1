//! Core library for storefront
//!
//! This crate implements the **Functional Core** of the storefront application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The storefront project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`storefront_core`** (this crate): Pure transformation functions with zero I/O
//! - **`storefront`**: HTTP fetching, terminal rendering and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No I/O operations, no external state mutations
//! - **Testable**: Can be tested with simple fixture data, no mocking required
//!
//! # Module Organization
//!
//! - [`catalog`]: Product model, category index, filter-sort engine, load
//!   lifecycle and interactive control parsing
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use storefront_core::catalog::{apply, Catalog, FilterCriteria, SortOrder};
//!
//! let catalog = Catalog::new(products);
//! let criteria = FilterCriteria::new("shirt", "clothing", SortOrder::Ascending);
//!
//! let visible = apply(&catalog, &criteria);
//! ```

pub mod catalog;
