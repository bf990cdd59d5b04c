//! Local snapshot and catalog document loading.
//!
//! Reads the decompressed JSON documents the scraping side persists to disk:
//! `auction_house_data.json` (the item/trait name catalog) and
//! `auction_house_prices.json` (per-server listing snapshots). Handles
//! `.gz`-compressed dumps transparently. User files are never deleted; a
//! corrupt document surfaces a parse error naming the file.

use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;

use crate::config;
use crate::error::{MarketError, Result};
use crate::models::{Catalog, ItemSales, ListingSnapshot};

// ---------------------------------------------------------------------------
// DataStore
// ---------------------------------------------------------------------------

/// A directory of persisted auction-house documents, addressed by logical
/// name (`<name>.json`, or `<name>.json.gz` as a fallback).
pub struct DataStore {
    data_dir: PathBuf,
}

impl DataStore {
    /// Open a store over the given directory, creating it if needed.
    ///
    /// With `None`, uses the platform-appropriate default data directory.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let dir = data_dir.unwrap_or_else(config::default_data_dir);
        fs::create_dir_all(&dir)?;
        Ok(Self { data_dir: dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load the item/trait name catalog document.
    pub fn catalog(&self, name: &str) -> Result<Catalog> {
        load_catalog(&self.document_path(name)?)
    }

    /// Load a single-server listings snapshot document.
    pub fn snapshot(&self, name: &str) -> Result<ListingSnapshot> {
        load_snapshot(&self.document_path(name)?)
    }

    /// Load a multi-server prices document, keyed by server id.
    pub fn server_snapshots(&self, name: &str) -> Result<BTreeMap<String, ListingSnapshot>> {
        load_server_snapshots(&self.document_path(name)?)
    }

    /// Load the catalog document under its conventional name
    /// (`auction_house_data.json`).
    pub fn default_catalog(&self) -> Result<Catalog> {
        self.catalog(config::CATALOG_DOCUMENT)
    }

    /// Load the multi-server prices document under its conventional name
    /// (`auction_house_prices.json`).
    pub fn default_server_snapshots(&self) -> Result<BTreeMap<String, ListingSnapshot>> {
        self.server_snapshots(config::SNAPSHOT_DOCUMENT)
    }

    fn document_path(&self, name: &str) -> Result<PathBuf> {
        let plain = self.data_dir.join(format!("{name}.json"));
        if plain.exists() {
            return Ok(plain);
        }
        let gz = self.data_dir.join(format!("{name}.json.gz"));
        if gz.exists() {
            return Ok(gz);
        }
        Err(MarketError::NotFound(format!(
            "no document '{}' in {}",
            name,
            self.data_dir.display()
        )))
    }
}

// ---------------------------------------------------------------------------
// Document loading
// ---------------------------------------------------------------------------

/// Load a catalog document from a JSON (or gzipped JSON) file.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    parse_document(path)
}

/// Load a single-server snapshot document: item id to `{sales: [...]}`.
pub fn load_snapshot(path: &Path) -> Result<ListingSnapshot> {
    let raw: BTreeMap<String, ItemSales> = parse_document(path)?;
    Ok(raw.into_iter().map(|(id, entry)| (id, entry.sales)).collect())
}

/// Load a multi-server prices document: server id to snapshot.
pub fn load_server_snapshots(path: &Path) -> Result<BTreeMap<String, ListingSnapshot>> {
    let raw: BTreeMap<String, BTreeMap<String, ItemSales>> = parse_document(path)?;
    Ok(raw
        .into_iter()
        .map(|(server, items)| {
            let snapshot = items
                .into_iter()
                .map(|(id, entry)| (id, entry.sales))
                .collect();
            (server, snapshot)
        })
        .collect())
}

fn parse_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|source| {
        tracing::warn!(path = %path.display(), error = %source, "document failed to parse");
        MarketError::Corrupt {
            path: path.display().to_string(),
            source,
        }
    })
}

fn read_to_string(path: &Path) -> Result<String> {
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = GzDecoder::new(file);
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        Ok(contents)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}
