//! # Currency Hex
//!
//! Application service layer and HTTP adapter for the currency conversion
//! service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, conversion, normalization)
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider`, allowing different
//! provider implementations to be injected.

pub mod inbound;
pub mod service;


pub use service::CurrencyService;
