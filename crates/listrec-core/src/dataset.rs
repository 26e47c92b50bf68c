//! In-memory listing table
//!
//! Listings are loaded once from a JSON array or JSON Lines file. The table
//! supplies the corpus for a ranking call and resolves alternate listings by
//! id.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DatasetConfig;
use crate::error::{ListrecError, Result};

/// One listing: an identifier, its free-text remarks and an optional group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Listing {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Ordered collection of listings
#[derive(Debug, Clone, Default)]
pub struct ListingTable {
    listings: Vec<Listing>,
}

/// Render an id field; strings are taken as is, numbers in their JSON form
fn id_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn listing_from_record(
    record: &Value,
    fields: &DatasetConfig,
    position: usize,
) -> std::result::Result<Listing, String> {
    let object = record
        .as_object()
        .ok_or_else(|| format!("record {} is not an object", position))?;

    let id = object
        .get(&fields.id_field)
        .and_then(id_from_value)
        .ok_or_else(|| {
            format!(
                "record {} has no usable '{}' field",
                position, fields.id_field
            )
        })?;

    let text = match object.get(&fields.text_field) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => {
            tracing::debug!(id = %id, field = %fields.text_field, "missing_text");
            String::new()
        }
        Some(other) => other.to_string(),
    };

    let group = object
        .get(&fields.group_field)
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(Listing { id, text, group })
}

impl ListingTable {
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load listings from `path`.
    ///
    /// Files ending in `.jsonl` or `.ndjson` are read one record per line,
    /// anything else must hold a JSON array of records.
    pub fn load(path: &Path, fields: &DatasetConfig) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let line_delimited = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("jsonl" | "ndjson")
        );

        let records: Vec<Value> = if line_delimited {
            content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(serde_json::from_str::<Value>)
                .collect::<std::result::Result<_, _>>()?
        } else {
            match serde_json::from_str::<Value>(&content)? {
                Value::Array(items) => items,
                _ => {
                    return Err(ListrecError::invalid_dataset(
                        path.display(),
                        "expected a JSON array of records",
                    ))
                }
            }
        };

        let listings = records
            .iter()
            .enumerate()
            .map(|(i, record)| listing_from_record(record, fields, i))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|reason| ListrecError::invalid_dataset(path.display(), reason))?;

        tracing::debug!(path = %path.display(), listings = listings.len(), "load_dataset");
        Ok(Self { listings })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    /// The remarks of the single listing whose id equals `id`
    pub fn lookup_text(&self, id: &str) -> Result<&str> {
        let mut matches = self.listings.iter().filter(|l| l.id == id);
        let first = matches.next().ok_or_else(|| ListrecError::AlternateNotFound {
            id: id.to_string(),
        })?;
        let extra = matches.count();
        if extra > 0 {
            return Err(ListrecError::AlternateAmbiguous {
                id: id.to_string(),
                matches: extra + 1,
            });
        }
        Ok(&first.text)
    }

    /// Texts and labels in file order, optionally restricted to one group
    pub fn corpus(&self, group: Option<&str>) -> (Vec<String>, Vec<String>) {
        self.listings
            .iter()
            .filter(|l| group.map_or(true, |g| l.group.as_deref() == Some(g)))
            .map(|l| (l.text.clone(), l.id.clone()))
            .unzip()
    }

    /// Distinct group names in sorted order
    pub fn groups(&self) -> Vec<&str> {
        self.listings
            .iter()
            .filter_map(|l| l.group.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
