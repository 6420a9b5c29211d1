use serde::Serialize;

/// The nine canonical columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Category,
    Name,
    Company,
    Role,
    Address,
    Phone,
    Fax,
    Mobile,
    Email,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Category,
        Field::Name,
        Field::Company,
        Field::Role,
        Field::Address,
        Field::Phone,
        Field::Fax,
        Field::Mobile,
        Field::Email,
    ];

    /// Fields of which at least one must be non-blank for a row to survive.
    pub const SIGNIFICANT: [Field; 6] = [
        Field::Name,
        Field::Company,
        Field::Email,
        Field::Phone,
        Field::Mobile,
        Field::Address,
    ];

    /// Japanese column heading used in the rendered page.
    pub fn label(self) -> &'static str {
        match self {
            Field::Category => "カテゴリ",
            Field::Name => "氏名",
            Field::Company => "会社名",
            Field::Role => "役職",
            Field::Address => "住所",
            Field::Phone => "電話",
            Field::Fax => "FAX",
            Field::Mobile => "携帯",
            Field::Email => "メール",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub category: String,
    pub name: String,
    pub company: String,
    pub role: String,
    pub address: String,
    pub phone: String,
    pub fax: String,
    pub mobile: String,
    pub email: String,
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Category => &self.category,
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Role => &self.role,
            Field::Address => &self.address,
            Field::Phone => &self.phone,
            Field::Fax => &self.fax,
            Field::Mobile => &self.mobile,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Category => &mut self.category,
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Role => &mut self.role,
            Field::Address => &mut self.address,
            Field::Phone => &mut self.phone,
            Field::Fax => &mut self.fax,
            Field::Mobile => &mut self.mobile,
            Field::Email => &mut self.email,
        };
        *slot = value;
    }

    /// True when any significant field has non-whitespace content.
    pub fn has_contact_data(&self) -> bool {
        Field::SIGNIFICANT
            .iter()
            .any(|&f| !self.get(f).trim().is_empty())
    }

    /// Lowercased haystack for the client-side filter.
    pub fn search_text(&self) -> String {
        Field::ALL
            .iter()
            .map(|&f| self.get(f))
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            category: "施工図".into(),
            name: "Tanaka Ichiro".into(),
            company: "ACME Corp".into(),
            phone: "03-1234-5678".into(),
            email: "Tanaka@Example.COM".into(),
            ..Default::default()
        }
    }

    #[test]
    fn search_text_is_lowercase_and_skips_empty() {
        let text = sample().search_text();
        assert_eq!(text, "施工図 tanaka ichiro acme corp 03-1234-5678 tanaka@example.com");
        assert!(!text.contains("  "));
    }

    #[test]
    fn search_text_contains_every_value() {
        let r = sample();
        let text = r.search_text();
        for f in Field::ALL {
            assert!(text.contains(&r.get(f).to_lowercase()));
        }
    }

    #[test]
    fn contact_data_ignores_category_role_fax() {
        let r = Record {
            category: "職員".into(),
            role: "所長".into(),
            fax: "03-0000-0000".into(),
            ..Default::default()
        };
        assert!(!r.has_contact_data());

        let r = Record { mobile: "090".into(), ..Default::default() };
        assert!(r.has_contact_data());
    }

    #[test]
    fn whitespace_only_is_blank() {
        let r = Record { name: "  \t".into(), ..Default::default() };
        assert!(!r.has_contact_data());
    }

    #[test]
    fn set_and_get_cover_all_fields() {
        let mut r = Record::default();
        for f in Field::ALL {
            r.set(f, f.label().to_string());
        }
        for f in Field::ALL {
            assert_eq!(r.get(f), f.label());
        }
        assert_eq!(Field::Email.index(), 8);
    }
}
