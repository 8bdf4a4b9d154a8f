use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DraftError;
use crate::models::EventDraft;

const DRAFT_EXTENSION: &str = "json";

/// A draft as written to disk, stamped with when it was saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDraft {
    pub draft: EventDraft,
    pub saved_at: DateTime<Utc>,
}

impl StoredDraft {
    pub fn new(draft: EventDraft) -> Self {
        Self {
            draft,
            saved_at: Utc::now(),
        }
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.saved_at).num_minutes()
    }

    /// Human-friendly age, e.g. "5m ago", "2h ago", "3d ago".
    pub fn age_display(&self) -> String {
        format_age(self.age_minutes())
    }
}

/// Round `value / unit` to the nearest whole unit, halves going up.
fn round_units(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

fn format_age(minutes: i64) -> String {
    const HOUR: i64 = 60;
    const DAY: i64 = 24 * HOUR;

    match minutes {
        // Negative ages come from clock skew
        m if m < 1 => "just now".to_string(),
        m if m < HOUR => format!("{}m ago", m),
        m if m < DAY => format!("{}h ago", round_units(m, HOUR)),
        m => format!("{}d ago", round_units(m, DAY)),
    }
}

/// One row of [`DraftStore::list`].
#[derive(Debug, Clone, PartialEq)]
pub struct DraftEntry {
    pub slug: String,
    pub name: String,
    pub saved_at: DateTime<Utc>,
}

impl DraftEntry {
    pub fn age_display(&self) -> String {
        format_age((Utc::now() - self.saved_at).num_minutes())
    }
}

/// Turn a draft name into a file-safe key: lowercase ASCII alphanumerics,
/// everything else collapsed into single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// JSON files of saved event drafts, one per slug, in a single directory.
pub struct DraftStore {
    dir: PathBuf,
}

impl DraftStore {
    pub fn new(dir: PathBuf) -> Result<Self, DraftError> {
        std::fs::create_dir_all(&dir).map_err(|source| DraftError::Dir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn draft_path(&self, slug: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", slug, DRAFT_EXTENSION))
    }

    fn read_stored(slug: &str, path: &Path) -> Result<StoredDraft, DraftError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DraftError::Io {
            slug: slug.to_string(),
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| DraftError::Json {
            slug: slug.to_string(),
            source,
        })
    }

    fn slug_for(name: &str) -> Result<String, DraftError> {
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(DraftError::EmptyName(name.to_string()));
        }
        Ok(slug)
    }

    /// Write the draft, replacing any earlier save under the same slug.
    /// Returns the slug used.
    pub fn save(&self, draft: &EventDraft) -> Result<String, DraftError> {
        let slug = Self::slug_for(&draft.name)?;
        let path = self.draft_path(&slug);

        let stored = StoredDraft::new(draft.clone());
        let contents = serde_json::to_string_pretty(&stored).map_err(|source| DraftError::Json {
            slug: slug.clone(),
            source,
        })?;
        std::fs::write(&path, contents).map_err(|source| DraftError::Io {
            slug: slug.clone(),
            path: path.clone(),
            source,
        })?;

        debug!(slug = %slug, segments = draft.segments.len(), "Saved draft");
        Ok(slug)
    }

    /// Load a draft by name or slug. `Ok(None)` if it was never saved.
    pub fn load(&self, name: &str) -> Result<Option<StoredDraft>, DraftError> {
        let slug = Self::slug_for(name)?;
        let path = self.draft_path(&slug);
        if !path.exists() {
            return Ok(None);
        }
        Self::read_stored(&slug, &path).map(Some)
    }

    /// All readable drafts, sorted by slug. The slug of a listed entry is the
    /// file stem, which for hand-copied files may not round-trip through
    /// [`slugify`].
    pub fn list(&self) -> Result<Vec<DraftEntry>, DraftError> {
        let read_dir = std::fs::read_dir(&self.dir).map_err(|source| DraftError::Dir {
            path: self.dir.clone(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(DRAFT_EXTENSION) {
                continue;
            }
            let Some(slug) = path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
                debug!(path = %path.display(), "Skipping draft with a non UTF-8 file name");
                continue;
            };

            match Self::read_stored(&slug, &path) {
                Ok(stored) => entries.push(DraftEntry {
                    slug,
                    name: stored.draft.name,
                    saved_at: stored.saved_at,
                }),
                Err(e) => debug!(slug = %slug, error = %e, "Skipping unreadable draft"),
            }
        }

        entries.sort_by(|a, b| a.slug.cmp(&b.slug));
        Ok(entries)
    }

    /// Remove a draft. Returns whether anything was deleted.
    pub fn delete(&self, name: &str) -> Result<bool, DraftError> {
        let slug = Self::slug_for(name)?;
        let path = self.draft_path(&slug);
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&path).map_err(|source| DraftError::Io { slug, path, source })?;
        Ok(true)
    }
}

// ============================================================================
// Tests
// ============================================================================
