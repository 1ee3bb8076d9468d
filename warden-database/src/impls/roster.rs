use anyhow::Context as _;

use crate::database::Database;
use crate::model::roster::RosterEntry;

#[derive(sqlx::FromRow)]
struct RosterRow {
    obj_id: i64,
    char_name: String,
    access_level: i32,
    is_gm: bool,
}

/// Every known character, ordered by object id.
pub async fn load_roster(db: &Database) -> anyhow::Result<Vec<RosterEntry>> {
    let rows: Vec<RosterRow> = sqlx::query_as(
        "SELECT obj_id, char_name, access_level, is_gm
         FROM characters
         ORDER BY obj_id ASC",
    )
    .fetch_all(db.pool())
    .await?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let player_id = u32::try_from(row.obj_id).context("obj_id row out of u32 range")?;
        entries.push(RosterEntry {
            player_id,
            name: row.char_name,
            access_level: row.access_level,
            is_gm: row.is_gm,
        });
    }

    Ok(entries)
}
