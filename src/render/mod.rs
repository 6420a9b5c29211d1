pub mod entries;
pub mod links;
pub mod page;

use std::collections::BTreeSet;

use tracing::info;

use crate::pipeline::category::{canonical_rank, CATEGORY_ORDER};
use crate::record::Record;
use entries::{card_html, table_row_html, TABLE_FIELDS};
use links::escape;

/// Group for records whose category cell was blank. A category literally
/// named the same joins this group.
pub const UNCATEGORIZED_LABEL: &str = "未分類";

const NO_DATA: &str = "該当データがありません";

/// Records sharing one category label, sorted for display.
#[derive(Debug)]
pub struct CategoryGroup<'a> {
    pub label: &'a str,
    pub records: Vec<&'a Record>,
}

fn group_key(record: &Record) -> &str {
    if record.category.is_empty() {
        UNCATEGORIZED_LABEL
    } else {
        &record.category
    }
}

/// Canonical groups in display order, then fallback labels sorted, then
/// the uncategorized group. Only labels with records get a group.
pub fn group_records(records: &[Record]) -> Vec<CategoryGroup<'_>> {
    let present: BTreeSet<&str> = records.iter().map(group_key).collect();

    let canonical = CATEGORY_ORDER.iter().copied().filter(|c| present.contains(*c));
    let fallback = present
        .iter()
        .copied()
        .filter(|c| *c != UNCATEGORIZED_LABEL && canonical_rank(c).is_none());
    let uncategorized = present
        .contains(UNCATEGORIZED_LABEL)
        .then_some(UNCATEGORIZED_LABEL);

    canonical
        .chain(fallback)
        .chain(uncategorized)
        .map(|label| {
            let mut members: Vec<&Record> =
                records.iter().filter(|r| group_key(r) == label).collect();
            // stable: ties keep source order
            members.sort_by(|a, b| (&a.company, &a.name).cmp(&(&b.company, &b.name)));
            CategoryGroup { label, records: members }
        })
        .collect()
}

fn section_html(group: &CategoryGroup) -> String {
    let cards: Vec<String> = group.records.iter().map(|r| card_html(r)).collect();
    let rows: Vec<String> = group.records.iter().map(|r| table_row_html(r)).collect();

    let cards = if cards.is_empty() {
        format!(r#"<div class="no-data">{}</div>"#, NO_DATA)
    } else {
        cards.join("\n")
    };
    let rows = if rows.is_empty() {
        format!(
            r#"<tr class="no-data"><td colspan="{}">{}</td></tr>"#,
            TABLE_FIELDS.len(),
            NO_DATA
        )
    } else {
        rows.join("\n")
    };
    let head: String = TABLE_FIELDS
        .iter()
        .map(|f| format!("<th>{}</th>", f.label()))
        .collect();

    format!(
        r#"<details class="category" data-category="{category}" open>
  <summary>{category}</summary>
  <div class="entries card-view">
{cards}
  </div>
  <div class="entries table-view">
    <table class="table">
      <thead>
        <tr>{head}</tr>
      </thead>
      <tbody>
{rows}
      </tbody>
    </table>
  </div>
</details>"#,
        category = escape(group.label),
        cards = cards,
        head = head,
        rows = rows,
    )
}

/// Render the full page for an already filtered and classified dataset.
pub fn render_document(records: &[Record], title: &str) -> String {
    let groups = group_records(records);
    let sections: Vec<String> = groups.iter().map(section_html).collect();
    info!(
        "Rendered {} records in {} category groups",
        records.len(),
        groups.len()
    );
    page::render_page(title, &sections.join("\n\n"))
}

// ── Tests ──
