//! Query construction for exports.

use sqlx::{QueryBuilder, Sqlite};

use super::types::ExportOptions;

/// Builds the resources export query with optional category/since filters.
pub fn resources_query(opts: &ExportOptions) -> QueryBuilder<'static, Sqlite> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT r.id, p.username AS owner_username, r.category, r.description,
                r.capacity, r.location_note, r.latitude, r.longitude,
                r.availability_percent, r.detail, r.created_at_ms, r.confirmed_at_ms
         FROM resources r
         JOIN profiles p ON p.id = r.owner",
    );

    let mut has_where = false;
    if let Some(category) = opts.category {
        builder.push(" WHERE r.category = ");
        builder.push_bind(category.as_str());
        has_where = true;
    }
    if let Some(since) = opts.since_ms {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("r.created_at_ms >= ");
        builder.push_bind(since);
    }
    builder.push(" ORDER BY r.created_at_ms DESC, r.id DESC");

    builder
}

/// Builds the threats export query with optional kind/since filters.
pub fn threats_query(opts: &ExportOptions) -> QueryBuilder<'static, Sqlite> {
    let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
        "SELECT t.id, p.username AS reporter_username, t.kind, t.description,
                t.latitude, t.longitude, t.reported_at_ms
         FROM threats t
         JOIN profiles p ON p.id = t.reporter",
    );

    let mut has_where = false;
    if let Some(kind) = opts.kind {
        builder.push(" WHERE t.kind = ");
        builder.push_bind(kind.as_str());
        has_where = true;
    }
    if let Some(since) = opts.since_ms {
        builder.push(if has_where { " AND " } else { " WHERE " });
        builder.push("t.reported_at_ms >= ");
        builder.push_bind(since);
    }
    builder.push(" ORDER BY t.reported_at_ms DESC, t.id DESC");

    builder
}
