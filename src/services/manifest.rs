//! Manifest loading
//!
//! The manifest is an XML document shaped like
//! `<root><fonts><font><id/><properties><familyName/><variationName/></properties></font>*</fonts></root>`.
//! The outer structure is walked with a pull reader and each `font`
//! subtree is deserialized on its own, so one bad entry is skipped
//! instead of failing the document.

use crate::error::ManifestError;
use crate::model::FontRecord;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct FontEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    properties: Option<FontProperties>,
}

#[derive(Debug, Deserialize)]
struct FontProperties {
    #[serde(rename = "familyName", default)]
    family_name: Option<String>,
    #[serde(rename = "variationName", default)]
    variation_name: Option<String>,
}

/// Blank values count as missing; others are kept as written
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl FontEntry {
    fn into_record(self) -> Result<FontRecord, &'static str> {
        let id = non_empty(self.id).ok_or("missing id")?;
        let props = self.properties.ok_or("missing properties")?;
        let name = non_empty(props.family_name).ok_or("missing familyName")?;
        let weight = non_empty(props.variation_name).ok_or("missing variationName")?;
        Ok(FontRecord::new(id, name, weight))
    }

    fn id_hint(&self) -> String {
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or("?")
            .to_string()
    }
}

fn malformed(err: impl std::fmt::Display) -> ManifestError {
    ManifestError::Malformed(err.to_string())
}

/// Turn the inner XML of one `font` element into a record
fn parse_entry(inner: &str) -> Result<FontRecord, String> {
    let entry: FontEntry = quick_xml::de::from_str(&format!("<font>{}</font>", inner))
        .map_err(|e| e.to_string())?;
    let id_hint = entry.id_hint();
    entry
        .into_record()
        .map_err(|reason| format!("{} (id {})", reason, id_hint))
}

/// Parse manifest XML into font records, in document order
///
/// Only `font` elements directly under the first `fonts` child of the
/// root are read.
pub fn parse_manifest(xml: &str) -> Result<Vec<FontRecord>, ManifestError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut in_fonts = false;
    let mut found_fonts = false;
    let mut index = 0usize;
    let mut records = Vec::new();

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => {
                let is_font = e.name().as_ref() == b"font";
                if in_fonts && depth == 2 && is_font {
                    let span = reader.read_to_end(e.name()).map_err(malformed)?;
                    let inner = &xml[span.start as usize..span.end as usize];
                    match parse_entry(inner) {
                        Ok(record) => records.push(record),
                        Err(reason) => {
                            log::warn!("Skipping manifest font #{}: {}", index, reason);
                        }
                    }
                    index += 1;
                    continue;
                }
                if depth == 1 && !found_fonts && e.name().as_ref() == b"fonts" {
                    in_fonts = true;
                    found_fonts = true;
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if in_fonts && depth == 2 && e.name().as_ref() == b"font" {
                    log::warn!("Skipping manifest font #{}: empty element", index);
                    index += 1;
                } else if depth == 1 && !found_fonts && e.name().as_ref() == b"fonts" {
                    found_fonts = true;
                }
            }
            Event::End(_) => {
                depth = depth.saturating_sub(1);
                if in_fonts && depth == 1 {
                    in_fonts = false;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !found_fonts {
        return Err(ManifestError::Malformed(
            "'fonts' element not found".to_string(),
        ));
    }

    Ok(records)
}

/// Load and parse the manifest file
pub fn load_manifest<P: AsRef<Path>>(path: P) -> Result<Vec<FontRecord>, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_manifest(&contents)?;
    log::info!("Loaded {} fonts from {}", records.len(), path.display());
    Ok(records)
}
