//! Quote engine for the carrier pricing service.
//!
//! - Pricing: base price from postcodes, vehicle markup, carrier price lists
//! - Quote Engine: validates requests and assembles quotes from a catalog

mod pricing;
mod quote;

pub use quote::*;
