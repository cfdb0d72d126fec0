//! Recognized `{{namespace.field}}` placeholders and their accessors.

use std::borrow::Cow;
use std::fmt;

use crate::models::campaign::format_budget;
use crate::models::{CampaignConfig, Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationField {
    Name,
    City,
    State,
    ZipCode,
    PhoneNumber,
    Address,
    LandingPageUrl,
}

impl LocationField {
    pub const ALL: [LocationField; 7] = [
        LocationField::Name,
        LocationField::City,
        LocationField::State,
        LocationField::ZipCode,
        LocationField::PhoneNumber,
        LocationField::Address,
        LocationField::LandingPageUrl,
    ];

    pub fn key(self) -> &'static str {
        match self {
            LocationField::Name => "name",
            LocationField::City => "city",
            LocationField::State => "state",
            LocationField::ZipCode => "zipCode",
            LocationField::PhoneNumber => "phoneNumber",
            LocationField::Address => "address",
            LocationField::LandingPageUrl => "landingPageUrl",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn get(self, loc: &Location) -> Option<&str> {
        match self {
            LocationField::Name => Some(&loc.name),
            LocationField::City => Some(&loc.city),
            LocationField::State => Some(&loc.state),
            LocationField::ZipCode => Some(&loc.zip_code),
            LocationField::PhoneNumber => Some(&loc.phone_number),
            LocationField::Address => Some(&loc.address),
            LocationField::LandingPageUrl => loc.landing_page_url.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CampaignField {
    Name,
    Objective,
    Platform,
    Budget,
    StartDate,
    EndDate,
}

impl CampaignField {
    pub const ALL: [CampaignField; 6] = [
        CampaignField::Name,
        CampaignField::Objective,
        CampaignField::Platform,
        CampaignField::Budget,
        CampaignField::StartDate,
        CampaignField::EndDate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CampaignField::Name => "name",
            CampaignField::Objective => "objective",
            CampaignField::Platform => "platform",
            CampaignField::Budget => "budget",
            CampaignField::StartDate => "startDate",
            CampaignField::EndDate => "endDate",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn get(self, c: &CampaignConfig) -> Cow<'_, str> {
        match self {
            CampaignField::Name => Cow::Borrowed(&c.name),
            CampaignField::Objective => Cow::Borrowed(&c.objective),
            CampaignField::Platform => Cow::Borrowed(&c.platform),
            CampaignField::Budget => Cow::Owned(format_budget(c.budget)),
            CampaignField::StartDate => Cow::Borrowed(&c.start_date),
            CampaignField::EndDate => Cow::Borrowed(&c.end_date),
        }
    }
}

/// A parsed placeholder. Custom keys borrow from the template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder<'t> {
    Location(LocationField),
    Campaign(CampaignField),
    Custom(&'t str),
}

impl<'t> Placeholder<'t> {
    /// Parse the text between `{{` and `}}`. Matching is literal and
    /// case-sensitive; anything outside the recognized set yields `None`.
    pub fn parse(expr: &'t str) -> Option<Self> {
        let (namespace, field) = expr.split_once('.')?;
        match namespace {
            "location" => LocationField::from_key(field).map(Placeholder::Location),
            "campaign" => CampaignField::from_key(field).map(Placeholder::Campaign),
            "custom" if !field.is_empty() => Some(Placeholder::Custom(field)),
            _ => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Placeholder::Custom(_))
    }
}

impl fmt::Display for Placeholder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placeholder::Location(field) => write!(f, "location.{}", field.key()),
            Placeholder::Campaign(field) => write!(f, "campaign.{}", field.key()),
            Placeholder::Custom(key) => write!(f, "custom.{key}"),
        }
    }
}
