//! Catalog and adoption-order front end for a small puppy listing site.
//!
//! The `data` feature exposes the catalog, filtering, pagination and pricing
//! logic; the `app` feature adds templates, configuration and the interactive
//! [`storefront::Storefront`] session driven by the `puppy-shop` binary.

pub mod catalog;
pub mod debounce;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod gateway;
#[cfg(feature = "app")]
pub mod models;
pub mod pagination;
#[cfg(feature = "app")]
pub mod render;
pub mod services;
#[cfg(feature = "app")]
pub mod storefront;
