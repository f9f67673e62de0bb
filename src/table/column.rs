//! Column descriptors and cell formatting.

use crate::model::{Record, Value};
use crate::utils::datetime::{format_display_date, ISO_DATE_FORMAT};
use crate::utils::format::{format_currency, truncate};

/// Colour family of a status badge; mapped to terminal colours by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

/// Value-to-tone lookup for badge cells. Unlisted values render neutral.
pub type BadgePalette = &'static [(&'static str, BadgeTone)];

/// How a column turns a field value into cell text.
#[derive(Debug, Clone, Copy)]
pub enum CellKind {
    Text,
    Badge(BadgePalette),
    Currency,
    Date,
    Truncate(usize),
    Custom(fn(&Record, &CellFormat) -> String),
}

/// Display settings that cell formatting depends on
#[derive(Debug, Clone, PartialEq)]
pub struct CellFormat {
    pub currency_symbol: String,
    pub date_format: String,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            date_format: ISO_DATE_FORMAT.to_string(),
        }
    }
}

/// A formatted cell, ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CellText {
    pub text: String,
    pub tone: Option<BadgeTone>,
}

impl CellText {
    fn plain(text: String) -> Self {
        Self { text, tone: None }
    }
}

#[derive(Debug, Clone)]
pub struct Column {
    pub key: String,
    pub header: String,
    pub kind: CellKind,
    pub sortable: bool,
    /// Preferred width in terminal columns; `None` shares the remainder
    pub width: Option<u16>,
}

impl Column {
    pub fn new(key: impl Into<String>, header: impl Into<String>, kind: CellKind) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            kind,
            sortable: false,
            width: None,
        }
    }

    pub fn text(key: &str, header: &str) -> Self {
        Self::new(key, header, CellKind::Text)
    }

    pub fn badge(key: &str, header: &str, palette: BadgePalette) -> Self {
        Self::new(key, header, CellKind::Badge(palette))
    }

    pub fn currency(key: &str, header: &str) -> Self {
        Self::new(key, header, CellKind::Currency)
    }

    pub fn date(key: &str, header: &str) -> Self {
        Self::new(key, header, CellKind::Date)
    }

    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Format this column's cell for `record`
    pub fn cell(&self, record: &Record, format: &CellFormat) -> CellText {
        let value = record.get(&self.key);
        match self.kind {
            CellKind::Text => CellText::plain(value.map(ToString::to_string).unwrap_or_default()),
            CellKind::Badge(palette) => {
                let text = value.map(ToString::to_string).unwrap_or_default();
                let tone = palette
                    .iter()
                    .find(|(candidate, _)| candidate.eq_ignore_ascii_case(&text))
                    .map(|(_, tone)| *tone)
                    .unwrap_or(BadgeTone::Neutral);
                CellText { text, tone: Some(tone) }
            }
            CellKind::Currency => CellText::plain(match value.and_then(Value::as_f64) {
                Some(amount) => format_currency(amount, &format.currency_symbol),
                None => value.map(ToString::to_string).unwrap_or_default(),
            }),
            CellKind::Date => CellText::plain(match value {
                Some(Value::Text(raw)) => format_display_date(raw, &format.date_format),
                Some(other) => other.to_string(),
                None => String::new(),
            }),
            CellKind::Truncate(max) => {
                CellText::plain(truncate(&value.map(ToString::to_string).unwrap_or_default(), max))
            }
            CellKind::Custom(render) => CellText::plain(render(record, format)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: BadgePalette = &[("active", BadgeTone::Success), ("inactive", BadgeTone::Danger)];

    #[test]
    fn badge_tone_follows_value() {
        let record = Record::new().with("status", "inactive");
        let cell = Column::badge("status", "Status", STATUS).cell(&record, &CellFormat::default());
        assert_eq!(cell.tone, Some(BadgeTone::Danger));

        let unknown = Record::new().with("status", "archived");
        let cell = Column::badge("status", "Status", STATUS).cell(&unknown, &CellFormat::default());
        assert_eq!(cell.tone, Some(BadgeTone::Neutral));
    }

    #[test]
    fn currency_and_date_cells_format() {
        let record = Record::new().with("price", 1299.5).with("created", "2024-03-05T10:00:00");
        let format = CellFormat {
            currency_symbol: "$".to_string(),
            date_format: "%d %b %Y".to_string(),
        };
        assert_eq!(Column::currency("price", "Price").cell(&record, &format).text, "$1,299.50");
        assert_eq!(Column::date("created", "Created").cell(&record, &format).text, "05 Mar 2024");
    }

    #[test]
    fn custom_cells_see_whole_record() {
        fn full_name(record: &Record, _: &CellFormat) -> String {
            format!("{} {}", record.text("first"), record.text("last"))
        }
        let record = Record::new().with("first", "Ada").with("last", "Lovelace");
        let column = Column::new("name", "Name", CellKind::Custom(full_name));
        assert_eq!(column.cell(&record, &CellFormat::default()).text, "Ada Lovelace");
    }
}
