//! Domain models for the currency conversion service.

pub mod currency;
pub mod record;

pub use currency::Currency;
pub use record::ConversionRecord;
