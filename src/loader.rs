use crate::error::TsResult;
use crate::period::PeriodKey;
use crate::record::RawRecord;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

/// Form rows grouped by period, in file order within each period.
pub type PeriodRecords = BTreeMap<PeriodKey, Vec<RawRecord>>;

/// Reads `year,month,name,interactions,avg_time,errors` rows. Rows with an
/// invalid period or undecodable bytes are skipped; bad numeric fields become 0.
pub fn load_period_records<R: Read>(reader: R) -> TsResult<PeriodRecords> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut periods = PeriodRecords::new();
    let mut skipped_count = 0;

    for (idx, result) in rdr.records().enumerate() {
        let row = idx + 2; // 1-based, after the header
        let rec = match result {
            Ok(rec) => rec,
            Err(e) => {
                warn!("[Row {}] CSV Parse Error: {}", row, e);
                skipped_count += 1;
                continue;
            }
        };

        if rec.len() < 3 {
            warn!("[Row {}] Expected at least year, month and name", row);
            skipped_count += 1;
            continue;
        }

        let key = match parse_period(&rec[0], &rec[1]) {
            Some(k) => k,
            None => {
                warn!("[Row {}] Invalid period '{}/{}'", row, &rec[1], &rec[0]);
                skipped_count += 1;
                continue;
            }
        };

        let field = |i: usize| rec.get(i).unwrap_or("");
        let record = RawRecord::from_form(field(2), field(3), field(4), field(5));
        periods.entry(key).or_default().push(record);
    }

    if skipped_count > 0 {
        warn!("Skipped {} invalid rows", skipped_count);
    }

    Ok(periods)
}

pub fn load_period_records_from_path<P: AsRef<Path>>(path: P) -> TsResult<PeriodRecords> {
    let path = path.as_ref();
    info!("Loading records from: {}", path.display());
    let file = File::open(path)?;
    load_period_records(file)
}

fn parse_period(year: &str, month: &str) -> Option<PeriodKey> {
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    PeriodKey::new(year, month).ok()
}
