// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod library_service;

#[cfg(test)]
mod library_service_tests;

pub use library_service::{CatalogLoad, LibraryService};
