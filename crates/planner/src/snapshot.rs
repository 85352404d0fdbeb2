use crate::{
    course::{Course, ElectiveEntry, Professor},
    error::PlannerResult,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference data served by the catalog endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPayload {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub professors: Vec<Professor>,
    #[serde(default)]
    pub is_electives: Vec<ElectiveEntry>,
}

/// A full copy of the working state, as exported and saved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub courses: Vec<Course>,
    pub profs: Vec<Professor>,
    #[serde(rename = "ISCAT")]
    pub catalog: Vec<ElectiveEntry>,
}

impl Snapshot {
    pub fn to_json_pretty(&self) -> PlannerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A snapshot to restore, normalized from any accepted import shape.
///
/// Fields left as `None` are not touched by a restore.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotImport {
    pub courses: Option<Vec<Course>>,
    pub profs: Option<Vec<Professor>>,
    pub catalog: Option<Vec<ElectiveEntry>>,
}

impl SnapshotImport {
    pub fn from_json(json: &str) -> PlannerResult<Self> {
        let record: SnapshotRecord = serde_json::from_str(json)?;
        Ok(record.normalize())
    }

    pub fn from_value(value: Value) -> PlannerResult<Self> {
        let record: SnapshotRecord = serde_json::from_value(value)?;
        Ok(record.normalize())
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_none() && self.profs.is_none() && self.catalog.is_none()
    }
}

impl From<Snapshot> for SnapshotImport {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            courses: Some(snapshot.courses),
            profs: Some(snapshot.profs),
            catalog: Some(snapshot.catalog),
        }
    }
}

/// Every shape a snapshot has been saved in.
///
/// Exports name the catalog `ISCAT`, some save paths `iscat`, and stored
/// layout rows wrap the whole snapshot in a `state` field.
#[derive(Deserialize)]
struct SnapshotRecord {
    #[serde(default)]
    courses: Option<Vec<Course>>,
    #[serde(default)]
    profs: Option<Vec<Professor>>,
    #[serde(rename = "ISCAT", default)]
    catalog: Option<Vec<ElectiveEntry>>,
    #[serde(default)]
    iscat: Option<Vec<ElectiveEntry>>,
    #[serde(default)]
    state: Option<Box<SnapshotRecord>>,
}

impl SnapshotRecord {
    fn normalize(self) -> SnapshotImport {
        if let Some(inner) = self.state {
            return inner.normalize();
        }

        SnapshotImport {
            courses: self.courses,
            profs: self.profs,
            catalog: self.catalog.or(self.iscat),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_key_variants() {
        let upper = SnapshotImport::from_value(json!({
            "courses": [], "profs": [], "ISCAT": [{ "id": "is1", "code": "IS 301" }]
        }))
        .unwrap();
        let lower = SnapshotImport::from_value(json!({
            "courses": [], "profs": [], "iscat": [{ "id": "is1", "code": "IS 301" }]
        }))
        .unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.catalog.unwrap()[0].id, "is1");
    }

    #[test]
    fn test_upper_key_wins() {
        let import = SnapshotImport::from_value(json!({
            "ISCAT": [], "iscat": [{ "id": "is1" }]
        }))
        .unwrap();
        assert_eq!(import.catalog, Some(vec![]));
    }

    #[test]
    fn test_nested_layout_row() {
        let import = SnapshotImport::from_value(json!({
            "id": "3f1c",
            "name": "Draft",
            "saved_by": "Anonymous",
            "state": { "profs": [{ "id": "p9", "name": "New Hire" }] }
        }))
        .unwrap();

        assert!(import.courses.is_none());
        assert_eq!(import.profs.unwrap()[0].id, "p9");
    }

    #[test]
    fn test_partial_and_malformed() {
        assert!(SnapshotImport::from_json("{}").unwrap().is_empty());
        assert!(SnapshotImport::from_json("not json").is_err());
        assert!(SnapshotImport::from_json("[1, 2]").is_err());
        assert!(SnapshotImport::from_json(r#"{ "courses": [{ "sem": 3 }] }"#).is_err());
    }
}
