//! Manifest types. Metadata and per-target fields are separate struct fields that
//! share one JSON object via `#[serde(flatten)]`. Keys this tool does not manage are
//! carried through untouched.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use crate::version::{compare_labels, MASTER};

/// One downloadable artifact of a version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactEntry {
    /// Public download URL.
    pub tarball: String,
    /// Lowercase hex SHA-256 of the file.
    pub sha256sum: String,
    /// Byte count, encoded as a decimal string.
    pub size: String,
    /// Fields added by other tooling (signatures, mirrors, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArtifactEntry {
    pub fn new(tarball: String, sha256sum: String, size: u64) -> Self {
        Self {
            tarball,
            sha256sum,
            size: size.to_string(),
            extra: Map::new(),
        }
    }
}

/// A non-metadata key of a version object: an artifact, or anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetField {
    Artifact(ArtifactEntry),
    Other(Value),
}

/// Metadata plus per-target artifacts for a single version label.
///
/// Metadata is optional so that an empty object (a freshly reset `master`) reads back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// ISO-8601 date the version was first recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
    /// Remaining keys, serialized in key order.
    #[serde(flatten)]
    pub fields: BTreeMap<String, TargetField>,
}

impl VersionEntry {
    /// Entry for a version seen for the first time.
    pub fn with_metadata(version: &str, date: &str, docs: &str) -> Self {
        Self {
            version: Some(version.to_string()),
            date: Some(date.to_string()),
            docs: Some(docs.to_string()),
            fields: BTreeMap::new(),
        }
    }

    pub fn artifact(&self, target: &str) -> Option<&ArtifactEntry> {
        match self.fields.get(target)? {
            TargetField::Artifact(a) => Some(a),
            TargetField::Other(_) => None,
        }
    }

    /// Artifacts by target name; other keys are skipped.
    pub fn artifacts(&self) -> impl Iterator<Item = (&str, &ArtifactEntry)> {
        self.fields.iter().filter_map(|(target, field)| match field {
            TargetField::Artifact(a) => Some((target.as_str(), a)),
            TargetField::Other(_) => None,
        })
    }

    /// Store `artifact` under `target`, returning whatever the key held before.
    pub fn set_artifact(&mut self, target: &str, artifact: ArtifactEntry) -> Option<TargetField> {
        self.fields
            .insert(target.to_string(), TargetField::Artifact(artifact))
    }
}

/// Version label → entry, in the order the entries are written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<(String, VersionEntry)>,
}

impl Manifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Labels in their current order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn get(&self, label: &str) -> Option<&VersionEntry> {
        self.position(label).map(|i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut VersionEntry> {
        self.position(label).map(move |i| &mut self.entries[i].1)
    }

    /// Insert or replace. A replaced entry keeps its position; a new one is appended.
    pub fn insert(&mut self, label: &str, entry: VersionEntry) -> Option<VersionEntry> {
        match self.position(label) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, entry)),
            None => {
                self.entries.push((label.to_string(), entry));
                None
            }
        }
    }

    /// Entry for `label`, appending an empty one if absent.
    pub fn entry_or_default(&mut self, label: &str) -> &mut VersionEntry {
        let i = match self.position(label) {
            Some(i) => i,
            None => {
                self.entries.push((label.to_string(), VersionEntry::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[i].1
    }

    /// Reorder for display: `master` first (if present), numeric versions
    /// descending, then any other labels in the order they were encountered.
    pub fn sort_versions(&mut self) {
        let master = self
            .position(MASTER)
            .map(|i| self.entries.remove(i));
        // Stable: non-numeric labels compare equal and keep their relative order.
        self.entries.sort_by(|(a, _), (b, _)| compare_labels(a, b));
        if let Some(master) = master {
            self.entries.insert(0, master);
        }
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.entries.iter().position(|(l, _)| l == label)
    }
}

impl Serialize for Manifest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, entry) in &self.entries {
            map.serialize_entry(label, entry)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Manifest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ManifestVisitor;

        impl<'de> Visitor<'de> for ManifestVisitor {
            type Value = Manifest;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object keyed by version label")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Manifest, A::Error> {
                let mut manifest = Manifest::new();
                while let Some((label, entry)) = access.next_entry::<String, VersionEntry>()? {
                    manifest.insert(&label, entry);
                }
                Ok(manifest)
            }
        }

        deserializer.deserialize_map(ManifestVisitor)
    }
}
