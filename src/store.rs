use crate::period::PeriodKey;
use crate::record::RawRecord;
use std::collections::HashMap;
use tracing::debug;

/// Session-lifetime record lists keyed by period. Each `put` replaces the
/// whole list for its period.
#[derive(Debug, Default, Clone)]
pub struct PeriodStore {
    periods: HashMap<PeriodKey, Vec<RawRecord>>,
}

impl PeriodStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: PeriodKey, records: Vec<RawRecord>) {
        debug!("Saving {} records for {}", records.len(), key);
        self.periods.insert(key, records);
    }

    /// Empty slice for periods never written.
    pub fn get(&self, key: &PeriodKey) -> &[RawRecord] {
        self.periods.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(year: i32, month: u32) -> PeriodKey {
        PeriodKey::new(year, month).unwrap()
    }

    #[test]
    fn test_get_unwritten_is_empty() {
        let store = PeriodStore::new();
        assert!(store.get(&key(2024, 1)).is_empty());
    }

    #[test]
    fn test_put_replaces_without_merge() {
        let mut store = PeriodStore::new();
        let k = key(2024, 3);
        store.put(
            k,
            vec![RawRecord::new("Ana", 1, 1.0, 0), RawRecord::new("Bea", 2, 2.0, 1)],
        );
        store.put(k, vec![RawRecord::new("Carla", 3, 3.0, 2)]);

        let got = store.get(&k);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].employee_name, "Carla");
    }

    #[test]
    fn test_empty_put_clears_period() {
        let mut store = PeriodStore::new();
        let k = key(2024, 3);
        store.put(k, vec![RawRecord::new("Ana", 1, 1.0, 0)]);
        store.put(k, Vec::new());
        assert!(store.get(&k).is_empty());
    }

    #[test]
    fn test_periods_are_independent() {
        let mut store = PeriodStore::new();
        store.put(key(2024, 3), vec![RawRecord::new("Ana", 1, 1.0, 0)]);
        store.put(key(2024, 4), vec![RawRecord::new("Bea", 1, 1.0, 0)]);
        assert_eq!(store.get(&key(2024, 3))[0].employee_name, "Ana");
        assert_eq!(store.get(&key(2024, 4))[0].employee_name, "Bea");
    }
}
