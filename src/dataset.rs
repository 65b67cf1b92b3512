use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Canonical origin used to absolutize relative listing links.
pub const SITE_ORIGIN: &str = "https://www.saramin.co.kr";

/// utf-8-sig marker; spreadsheet tools need it to decode Korean text.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// One job listing. A field that could not be extracted is always the empty
/// string, never a missing value, so consumers don't branch on nullability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub title: String,
    pub company: String,
    pub location: String,
    pub experience: String,
    pub education: String,
    pub employment_type: String,
    pub salary: String,
    pub deadline: String,
    pub link: String,
}

/// Write the dataset as a BOM-prefixed CSV, one row per listing, header row
/// first. An empty dataset is skipped entirely (no header-only file) and
/// reported via the `false` return.
pub fn save_csv(jobs: &[JobListing], path: &Path) -> Result<bool> {
    if jobs.is_empty() {
        return Ok(false);
    }

    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    for job in jobs {
        writer.serialize(job)?;
    }
    writer.flush()?;
    Ok(true)
}

/// Load a dataset previously written by [`save_csv`], tolerating a missing
/// byte-order marker.
pub fn load_csv(path: &Path) -> Result<Vec<JobListing>> {
    let mut raw = Vec::new();
    File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .read_to_end(&mut raw)?;
    let body = raw.strip_prefix(BOM).unwrap_or(&raw);

    let mut reader = csv::Reader::from_reader(body);
    let mut jobs = Vec::new();
    for row in reader.deserialize() {
        jobs.push(row?);
    }
    Ok(jobs)
}
