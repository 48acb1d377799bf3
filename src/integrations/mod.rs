// src/integrations/mod.rs
//
// External Integrations Module

pub mod library_api;

pub use library_api::client::LibraryApiClient;
