//! Shopping-cart state model with durable, swappable persistence.
//!
//! The crate is the core behind a small storefront: [`cart`] owns the state
//! model and its mutations, [`storage`] abstracts the durable slot the cart
//! survives in, and [`view`] projects cart snapshots for display and handoff.
//! UI event surfaces (the CLI binary here) live outside the core and only
//! call mutators and renderers.

pub mod cart;
pub mod config;
pub mod storage;
pub mod view;
