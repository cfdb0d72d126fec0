use std::borrow::Cow;
use std::collections::HashMap;

use crate::models::{CampaignConfig, Location};

use super::placeholder::Placeholder;

/// Per-location `custom.<key>` values.
pub type CustomVars = HashMap<String, String>;

/// The values available to one (location, ad) resolution.
///
/// Every part is optional. Built for a single call and dropped afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableContext<'a> {
    pub location: Option<&'a Location>,
    pub campaign: Option<&'a CampaignConfig>,
    pub custom: Option<&'a CustomVars>,
}

impl<'a> VariableContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_location(mut self, location: &'a Location) -> Self {
        self.location = Some(location);
        self
    }

    #[must_use]
    pub fn with_campaign(mut self, campaign: &'a CampaignConfig) -> Self {
        self.campaign = Some(campaign);
        self
    }

    #[must_use]
    pub fn with_custom(mut self, custom: &'a CustomVars) -> Self {
        self.custom = Some(custom);
        self
    }

    /// Value for a placeholder, or `None` when its source is absent.
    pub fn lookup(&self, placeholder: &Placeholder<'_>) -> Option<Cow<'a, str>> {
        match *placeholder {
            Placeholder::Location(field) => {
                self.location.and_then(|loc| field.get(loc)).map(Cow::Borrowed)
            }
            Placeholder::Campaign(field) => self.campaign.map(|c| field.get(c)),
            Placeholder::Custom(key) => {
                self.custom.and_then(|m| m.get(key)).map(|v| Cow::Borrowed(v.as_str()))
            }
        }
    }
}
