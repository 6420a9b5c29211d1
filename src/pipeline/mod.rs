pub mod category;
pub mod columns;

use tracing::info;

use crate::record::Record;
use crate::source::RawTable;

/// Records that survived the pipeline, plus counts for reporting.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub rows_read: usize,
    pub rows_dropped: usize,
}

/// Three-stage pipeline: raw table → canonical records → classified → filtered.
pub fn build_dataset(table: &RawTable) -> Dataset {
    let mut records = columns::normalize(table);
    classify(&mut records);

    let rows_read = records.len();
    records.retain(Record::has_contact_data);
    let rows_dropped = rows_read - records.len();

    info!(
        "Kept {} of {} rows ({} blank rows dropped)",
        records.len(),
        rows_read,
        rows_dropped
    );
    Dataset { records, rows_read, rows_dropped }
}

fn classify(records: &mut [Record]) {
    for record in records {
        record.category = category::normalize_category(&record.category);
    }
}

// ── Tests ──
