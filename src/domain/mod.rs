//! Domain types for the carrier pricing service.
//!
//! Vehicles, postcodes, carrier offers and the quotes built from them.

mod carrier;
pub mod postcode;
mod quote;
mod vehicle;

pub use carrier::*;
pub use quote::*;
pub use vehicle::*;
