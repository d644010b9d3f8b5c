//! Export row shapes, shared by the CSV and JSONL writers.

use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// One exported resource, flattened.
#[derive(Debug, Serialize)]
pub struct ResourceExportRow {
    pub id: i64,
    pub owner_username: String,
    pub category: String,
    pub description: String,
    pub capacity: i64,
    pub location_note: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub availability_percent: i64,
    /// Tagged detail payload, passed through as JSON.
    pub detail: serde_json::Value,
    pub created_at_ms: i64,
    pub confirmed_at_ms: Option<i64>,
}

impl ResourceExportRow {
    /// Maps a joined `resources` row.
    pub fn from_row(row: &SqliteRow) -> anyhow::Result<Self> {
        let detail_json: String = row.get("detail");
        let detail: serde_json::Value = serde_json::from_str(&detail_json)?;
        Ok(Self {
            id: row.get("id"),
            owner_username: row.get("owner_username"),
            category: row.get("category"),
            description: row.get("description"),
            capacity: row.get("capacity"),
            location_note: row.get("location_note"),
            latitude: row.get("latitude"),
            longitude: row.get("longitude"),
            availability_percent: row.get("availability_percent"),
            detail,
            created_at_ms: row.get("created_at_ms"),
            confirmed_at_ms: row.get("confirmed_at_ms"),
        })
    }

    /// Column order for the CSV header and rows.
    pub const CSV_HEADER: [&'static str; 12] = [
        "id",
        "owner_username",
        "category",
        "description",
        "capacity",
        "location_note",
        "latitude",
        "longitude",
        "availability_percent",
        "detail",
        "created_at_ms",
        "confirmed_at_ms",
    ];

    /// The row as CSV fields, in header order.
    pub fn csv_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.owner_username.clone(),
            self.category.clone(),
            self.description.clone(),
            self.capacity.to_string(),
            self.location_note.clone().unwrap_or_default(),
            self.latitude.map(|v| v.to_string()).unwrap_or_default(),
            self.longitude.map(|v| v.to_string()).unwrap_or_default(),
            self.availability_percent.to_string(),
            self.detail.to_string(),
            self.created_at_ms.to_string(),
            self.confirmed_at_ms
                .map(|v| v.to_string())
                .unwrap_or_default(),
        ]
    }
}

/// One exported threat, flattened.
#[derive(Debug, Serialize)]
pub struct ThreatExportRow {
    pub id: i64,
    pub reporter_username: String,
    pub kind: String,
    pub description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub reported_at_ms: i64,
}

impl ThreatExportRow {
    /// Maps a joined `threats` row.
    pub fn from_row(row: &SqliteRow) -> Self {
        Self {
            id: row.get("id"),
            reporter_username: row.get("reporter_username"),
            kind: row.get("kind"),
            description: row.get("description"),
            latitude: row.get("latitude"),
            longitude: row.get("longitude"),
            reported_at_ms: row.get("reported_at_ms"),
        }
    }

    /// Column order for the CSV header and rows.
    pub const CSV_HEADER: [&'static str; 7] = [
        "id",
        "reporter_username",
        "kind",
        "description",
        "latitude",
        "longitude",
        "reported_at_ms",
    ];

    /// The row as CSV fields, in header order.
    pub fn csv_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.reporter_username.clone(),
            self.kind.clone(),
            self.description.clone().unwrap_or_default(),
            self.latitude.map(|v| v.to_string()).unwrap_or_default(),
            self.longitude.map(|v| v.to_string()).unwrap_or_default(),
            self.reported_at_ms.to_string(),
        ]
    }
}
