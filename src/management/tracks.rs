use std::{
    collections::{BTreeMap, HashSet},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

use crate::{
    config,
    error::Error,
    types::{TrackRecord, TrackRequest},
    utils,
};

/// Every track ever fetched, keyed by Spotify id, plus the log of when each
/// one was requested.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackLibrary {
    #[serde(default)]
    pub tracks: BTreeMap<String, TrackRecord>,
    #[serde(default)]
    pub history: Vec<TrackRequest>,
}

impl TrackLibrary {
    pub fn get(&self, track_id: &str) -> Option<&TrackRecord> {
        self.tracks.get(track_id)
    }
}

/// JSON-backed track library at `<data dir>/tracks.json`.
pub struct TrackStore {
    root: PathBuf,
}

impl TrackStore {
    pub fn new() -> Self {
        Self::with_root(config::data_dir())
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn load(&self) -> Result<TrackLibrary, Error> {
        super::read_json_or_default(&self.path()).await
    }

    /// Inserts or replaces the given tracks and logs one request per track.
    ///
    /// Release dates are normalized and genres replace whatever was stored
    /// before. Records without an id are skipped. Returns the number of
    /// tracks written.
    pub async fn upsert(&self, records: &[TrackRecord]) -> Result<usize, Error> {
        let mut library = self.load().await?;
        let now = utils::now_timestamp();
        let mut count = 0;

        for record in records.iter().filter(|r| !r.id.is_empty()) {
            let mut record = record.clone();
            record.release_date = utils::normalize_release_date(record.release_date.as_deref());

            library.history.push(TrackRequest {
                track_id: record.id.clone(),
                requested_at: now,
            });
            library.tracks.insert(record.id.clone(), record);
            count += 1;
        }

        super::write_json_atomic(&self.path(), &library).await?;
        Ok(count)
    }

    /// Most popular tracks first; ties are ordered by name.
    pub async fn by_popularity(&self, limit: usize) -> Result<Vec<TrackRecord>, Error> {
        let library = self.load().await?;
        let mut tracks: Vec<TrackRecord> = library.tracks.into_values().collect();
        tracks.sort_by(|a, b| {
            b.popularity
                .cmp(&a.popularity)
                .then_with(|| a.name.cmp(&b.name))
        });
        tracks.truncate(limit);
        Ok(tracks)
    }

    /// Most recently requested tracks with their latest request time, newest
    /// first. Each track appears once.
    pub async fn recent(&self, limit: usize) -> Result<Vec<(TrackRecord, u64)>, Error> {
        let library = self.load().await?;
        let mut seen = HashSet::new();

        Ok(library
            .history
            .iter()
            .rev()
            .filter(|req| seen.insert(req.track_id.as_str()))
            .filter_map(|req| {
                library
                    .get(&req.track_id)
                    .map(|track| (track.clone(), req.requested_at))
            })
            .take(limit)
            .collect())
    }

    fn path(&self) -> PathBuf {
        self.root.join("tracks.json")
    }
}

impl Default for TrackStore {
    fn default() -> Self {
        Self::new()
    }
}
