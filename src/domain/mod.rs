//! Domain model of the puppy storefront.

pub mod age;
pub mod filter;
pub mod order;
pub mod puppy;
pub mod types;
