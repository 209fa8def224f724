pub mod config;
pub mod humanloop_client;
