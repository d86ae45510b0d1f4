pub mod cache;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod formatting;

#[cfg(any(test, feature = "development"))]
pub mod dev;
#[cfg(any(test, feature = "development"))]
pub mod fixtures;
