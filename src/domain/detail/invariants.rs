use super::entity::{DetailRecord, StatName};
use crate::domain::{DomainError, DomainResult};

/// Validates a detail record against the id it was looked up by.
///
/// Applied to records read back from the cache; a record failing here is
/// treated like undecodable bytes.
pub fn validate_detail_record(record: &DetailRecord, expected_id: u32) -> DomainResult<()> {
    if record.id != expected_id {
        return Err(DomainError::InvariantViolation(format!(
            "Cached record id {} does not match requested id {}",
            record.id, expected_id
        )));
    }
    validate_stats(record)
}

/// Exactly the six base stats, in display order
fn validate_stats(record: &DetailRecord) -> DomainResult<()> {
    let names: Vec<StatName> = record.stats.iter().map(|s| s.name).collect();
    if names != StatName::ALL {
        return Err(DomainError::InvariantViolation(format!(
            "Record {} has unexpected stats layout: {:?}",
            record.id, names
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StatEntry;

    fn record(id: u32) -> DetailRecord {
        DetailRecord {
            id,
            name: "bulbasaur".to_string(),
            sprite_url: None,
            animated_sprite_url: None,
            types: vec!["grass".to_string(), "poison".to_string()],
            stats: StatName::ALL
                .into_iter()
                .map(|name| StatEntry { name, base_value: 45 })
                .collect(),
            cry_url: None,
        }
    }

    #[test]
    fn test_valid_record() {
        assert!(validate_detail_record(&record(1), 1).is_ok());
    }

    #[test]
    fn test_id_mismatch_fails() {
        assert!(validate_detail_record(&record(2), 1).is_err());
    }

    #[test]
    fn test_missing_stat_fails() {
        let mut record = record(1);
        record.stats.pop();
        assert!(validate_detail_record(&record, 1).is_err());
    }
}
