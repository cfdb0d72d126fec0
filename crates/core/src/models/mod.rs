//! Plain records shared across the crate: stores, campaigns and ad creatives.

pub mod ad;
pub mod campaign;
pub mod location;

pub use ad::{AdCreative, ProcessedAd};
pub use campaign::{BidStrategy, BudgetType, CampaignConfig, KNOWN_OBJECTIVES};
pub use location::{Coordinates, Location, LocationGroup};
