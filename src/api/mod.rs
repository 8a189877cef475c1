// src/api/mod.rs
//
// Backend REST API boundary.

pub mod client;
pub mod types;

pub use client::{HttpMarketplaceApi, MarketplaceApi};
pub use types::{
    LoginOutcome, NewAccount, NewApplication, RegistrationRequest,
};

#[cfg(test)]
pub use client::MockMarketplaceApi;
