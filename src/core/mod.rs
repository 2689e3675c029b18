//! Core translation adapter module

pub mod adapter;
pub mod config;
pub mod environment;
pub mod errors;
pub mod locales;
pub mod models;
pub mod provider;
