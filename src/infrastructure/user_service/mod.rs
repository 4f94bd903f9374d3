//! User service integration

pub mod client;

pub use client::UserServiceClient;
