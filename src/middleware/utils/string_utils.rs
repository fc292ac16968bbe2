use crate::middleware::error::{AppError, AppResult};
use surrealdb::sql::Thing;

/// Parses `value` as a record id of `table`, accepting either the raw key (`abc`)
/// or the full record id (`table:abc`).
pub fn get_table_thing(table: &str, value: &str) -> AppResult<Thing> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Generic {
            description: format!("empty {table} id"),
        });
    }

    if !value.contains(':') {
        return Ok(Thing::from((table, value)));
    }

    let record = Thing::try_from(value).map_err(|_| AppError::Generic {
        description: format!("error into {table} record id"),
    })?;
    if record.tb != table {
        return Err(AppError::Generic {
            description: format!("{value} is not a {table} record"),
        });
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_raw_key_and_full_record_id() {
        let raw = get_table_thing("tuit", "abc").unwrap();
        let full = get_table_thing("tuit", "tuit:abc").unwrap();
        assert_eq!(raw, full);
        assert_eq!(full.to_raw(), "tuit:abc");
    }

    #[test]
    fn rejects_record_of_other_table() {
        assert!(get_table_thing("tuit", "local_user:abc").is_err());
        assert!(get_table_thing("tuit", " ").is_err());
    }
}
