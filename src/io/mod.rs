use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use tracing::warn;

use crate::survival::ResponseData;

pub mod json_writer;
pub mod summary;
pub mod tsv_writer;

pub fn read_response(path: &Path) -> Result<ResponseData> {
    let reader = open_maybe_gz(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_reader(BufReader::new(reader))
        .with_context(|| format!("invalid prediction response in {}", path.display()))?;
    let response = ResponseData::from_value(value);
    if let Some(reason) = &response.malformed {
        warn!(path = %path.display(), reason = %reason, "saved response has unexpected field types");
    }
    Ok(response)
}

pub(crate) fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path)?;
    if path.extension().and_then(|s| s.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(file);
        Ok(Box::new(decoder))
    } else {
        Ok(Box::new(file))
    }
}
