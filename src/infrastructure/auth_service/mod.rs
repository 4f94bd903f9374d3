//! Auth service integration

pub mod client;

pub use client::AuthServiceClient;
