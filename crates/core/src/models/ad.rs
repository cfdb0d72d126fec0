use serde::{Deserialize, Serialize};

/// One ad variant as authored in a template file. Text fields may contain
/// `{{namespace.field}}` placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdCreative {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub call_to_action: String,
    #[serde(default)]
    pub landing_page_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// An ad creative resolved against one location, ready for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedAd {
    pub location_id: String,
    pub location_name: String,
    pub ad_set_name: String,
    pub ad_name: String,
    pub original: AdCreative,
    pub title: String,
    pub body: String,
    pub call_to_action: String,
    pub landing_page_url: String,
}
