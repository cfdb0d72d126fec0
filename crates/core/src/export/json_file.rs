use std::io::Write;

use serde::Serialize;

use crate::models::{CampaignConfig, ProcessedAd};

use super::ExportError;

#[derive(Serialize)]
struct JsonExport<'a> {
    campaign: &'a CampaignConfig,
    ads: &'a [ProcessedAd],
}

pub(super) fn write<W: Write>(
    mut writer: W,
    ads: &[ProcessedAd],
    campaign: &CampaignConfig,
) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut writer, &JsonExport { campaign, ads })?;
    writer.write_all(b"\n")?;
    Ok(())
}
