//! Turning a campaign plan into ready-to-export ads.

pub mod processor;
pub mod review;

pub use processor::{Overrides, process_ads};
pub use review::{CampaignReview, Issue, Severity, review, validate_campaign};
