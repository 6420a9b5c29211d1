use tracing::debug;

use crate::record::{Field, Record};
use crate::source::RawTable;

/// Known header spellings. Matching is case-insensitive on the trimmed header.
const SYNONYMS: &[(&str, Field)] = &[
    ("カテゴリ", Field::Category),
    ("カテゴリー", Field::Category),
    ("category", Field::Category),
    ("業種", Field::Category),
    ("業種ギョウシュ", Field::Category),
    ("氏名", Field::Name),
    ("名前", Field::Name),
    ("name", Field::Name),
    ("会社名", Field::Company),
    ("会社", Field::Company),
    ("所属", Field::Company),
    ("company", Field::Company),
    ("役職", Field::Role),
    ("肩書", Field::Role),
    ("position", Field::Role),
    ("住所", Field::Address),
    ("address", Field::Address),
    ("電話", Field::Phone),
    ("TEL", Field::Phone),
    ("tel", Field::Phone),
    ("電話番号", Field::Phone),
    ("FAX", Field::Fax),
    ("fax", Field::Fax),
    ("FAX番号", Field::Fax),
    ("携帯", Field::Mobile),
    ("mobile", Field::Mobile),
    ("携帯電話", Field::Mobile),
    ("携帯番号", Field::Mobile),
    ("メール", Field::Email),
    ("mail", Field::Email),
    ("email", Field::Email),
    ("E-mail", Field::Email),
    ("アドレス", Field::Email),
];

/// Resolve a source header to its canonical field, if any.
pub fn field_for_header(header: &str) -> Option<Field> {
    let wanted = header.trim().to_lowercase();
    SYNONYMS
        .iter()
        .find(|(name, _)| name.to_lowercase() == wanted)
        .map(|&(_, field)| field)
}

/// Source column indices feeding each canonical field, left to right.
pub fn match_columns(headers: &[String]) -> [Vec<usize>; 9] {
    let mut sources: [Vec<usize>; 9] = Default::default();
    for (idx, header) in headers.iter().enumerate() {
        match field_for_header(header) {
            Some(field) => sources[field.index()].push(idx),
            None => debug!("Ignoring unrecognized column {:?}", header),
        }
    }
    for field in Field::ALL {
        let cols: Vec<&str> = sources[field.index()]
            .iter()
            .map(|&i| headers[i].as_str())
            .collect();
        debug!("{:?} <- {:?}", field, cols);
    }
    sources
}

/// Map every raw row onto the canonical schema.
pub fn normalize(table: &RawTable) -> Vec<Record> {
    let sources = match_columns(&table.headers);
    table
        .rows
        .iter()
        .map(|row| {
            let mut record = Record::default();
            for field in Field::ALL {
                record.set(field, merge_sources(row, &sources[field.index()]));
            }
            record
        })
        .collect()
}

/// First non-blank value across the matched columns; never concatenates.
fn merge_sources(row: &[String], columns: &[usize]) -> String {
    let mut cols = columns.iter().map(|&i| coerce(row.get(i).map(String::as_str)));
    let first = cols.next().unwrap_or_default();
    cols.fold(first, |acc, next| {
        if acc.trim().is_empty() && !next.trim().is_empty() {
            next
        } else {
            acc
        }
    })
}

/// Missing cells and the literal `nan` token (any case) read as empty.
fn coerce(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.eq_ignore_ascii_case("nan") => v.to_string(),
        _ => String::new(),
    }
}

// ── Tests ──
