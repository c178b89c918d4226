//! Similar-movie recommendations from precomputed similarity matrices.
//!
//! A trained model artifact supplies the catalog, a genre-based (content)
//! similarity matrix and a rating-based (collaborative) one. The
//! [`services`] layer resolves titles and ranks neighbours; [`api`] serves
//! them over HTTP.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
