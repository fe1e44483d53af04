//! Platform-independent core of the badge portal, shared by the browser
//! frontend and the native host.

pub mod auth;
pub mod batch;
pub mod config;
pub mod ingest;
pub mod jobs;
pub mod loader;
pub mod model;
pub mod requests;
pub mod route;
pub mod service;
pub mod share;
