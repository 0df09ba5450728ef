//! Clinio backend: symptom analysis, analysis history and usage stats over HTTP.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
