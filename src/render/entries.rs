use crate::record::{Field, Record};

use super::links::{anchor, escape, mail_link, tel_link};

/// Columns of the table view; category is the group, not a column.
pub const TABLE_FIELDS: [Field; 8] = [
    Field::Name,
    Field::Company,
    Field::Role,
    Field::Address,
    Field::Phone,
    Field::Fax,
    Field::Mobile,
    Field::Email,
];

fn labelled(field: Field, value_html: &str) -> String {
    format!(r#"<span class="label">{}:</span> {}"#, field.label(), value_html)
}

pub fn card_html(r: &Record) -> String {
    let mut contact = Vec::new();
    if !r.phone.trim().is_empty() {
        contact.push(labelled(Field::Phone, &anchor(tel_link(&r.phone), &r.phone)));
    }
    if !r.fax.trim().is_empty() {
        contact.push(labelled(Field::Fax, &escape(&r.fax)));
    }
    if !r.mobile.trim().is_empty() {
        contact.push(labelled(Field::Mobile, &anchor(tel_link(&r.mobile), &r.mobile)));
    }

    let company_role = [&r.company, &r.role]
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| escape(v))
        .collect::<Vec<_>>()
        .join(" / ");

    let mut body = Vec::new();
    if !contact.is_empty() {
        body.push(format!(r#"<div class="contact">{}</div>"#, contact.join(" / ")));
    }
    if !r.email.trim().is_empty() {
        let email = labelled(Field::Email, &anchor(mail_link(&r.email), &r.email));
        body.push(format!(r#"<div class="email">{}</div>"#, email));
    }
    if !r.address.is_empty() {
        let addr = labelled(Field::Address, &escape(&r.address));
        body.push(format!(r#"<div class="addr">{}</div>"#, addr));
    }

    format!(
        r#"<div class="card entry" data-search="{search}">
  <div class="card-header">
    <div class="name">{name}</div>
    <div class="company-role">{company_role}</div>
  </div>
  <div class="card-body">
    {body}
  </div>
</div>"#,
        search = escape(&r.search_text()),
        name = escape(&r.name),
        company_role = company_role,
        body = body.join("\n    "),
    )
}

fn cell_html(r: &Record, field: Field) -> String {
    let value = r.get(field);
    match field {
        Field::Phone | Field::Mobile | Field::Email | Field::Fax if value.trim().is_empty() => {
            String::new()
        }
        Field::Phone | Field::Mobile => anchor(tel_link(value), value),
        Field::Email => anchor(mail_link(value), value),
        _ => escape(value),
    }
}

fn cell_class(field: Field) -> &'static str {
    match field {
        Field::Name => "td-name",
        Field::Company => "td-company",
        Field::Role => "td-role",
        Field::Address => "td-addr",
        Field::Phone => "td-tel",
        Field::Fax => "td-fax",
        Field::Mobile => "td-mobile",
        Field::Email => "td-mail",
        Field::Category => "td-category",
    }
}

pub fn table_row_html(r: &Record) -> String {
    let cells: Vec<String> = TABLE_FIELDS
        .iter()
        .map(|&f| format!(r#"  <td class="{}">{}</td>"#, cell_class(f), cell_html(r, f)))
        .collect();
    format!(
        "<tr class=\"entry\" data-search=\"{}\">\n{}\n</tr>",
        escape(&r.search_text()),
        cells.join("\n")
    )
}

// ── Tests ──
