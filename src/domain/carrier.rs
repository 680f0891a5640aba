//! Carrier offers as provided by a catalog.

/// A carrier's priced service for one vehicle type.
///
/// `markup` already combines the carrier's base price and the service's own
/// markup; it is added to the vehicle price as-is. Catalogs loaded from files
/// only produce non-negative markups and delivery times. The engine still
/// rejects a sum that overflows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierOffer {
    /// Carrier name.
    pub name: String,
    /// Additive markup, in minor currency units.
    pub markup: i64,
    /// Delivery time in minutes.
    pub delivery_time: i64,
}

impl CarrierOffer {
    pub fn new(name: impl Into<String>, markup: i64, delivery_time: i64) -> Self {
        Self {
            name: name.into(),
            markup,
            delivery_time,
        }
    }
}
