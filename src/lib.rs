pub mod api;
pub mod chronicling;
pub mod config;
pub mod data_models;
pub mod error;
pub mod function_client;
