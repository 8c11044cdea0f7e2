//! Plant gallery — a server-rendered image gallery over a hosted store.
//!
//! Each visitor session holds its own copy of the startup image list and an
//! upload dialog. Accepted uploads are inserted into the store and appended
//! to the session list whether or not the insert succeeded.

pub mod config;
pub mod gallery;
pub mod render;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
