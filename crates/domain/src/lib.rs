//! # haikus-domain
//!
//! Pure domain model for the haiku catalogue.
//!
//! ## Responsibilities
//! - Foundational types: the typed [`HaikuId`](id::HaikuId), error conventions
//! - Define the **Haiku** record (title, author, text, release and upload dates)
//! - Own the `YYYY-MM-DD` date contract shared by storage and the API
//! - Contain all invariant enforcement
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod date;
pub mod error;
pub mod id;

pub mod haiku;
