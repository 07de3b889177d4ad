//! Typed convenience methods, one module per backend resource group
//!
//! Every method fixes a path, verb and body shape over the request
//! core in [`crate::http`] and nothing else; error handling and the
//! token lifecycle stay in the core.

mod admin;
mod auth;
mod banners;
mod categories;
mod keywords;
mod products;
mod settings;
mod tags;
mod uploads;
