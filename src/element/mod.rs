//! Element records and the validated in-memory element table.
//!
//! Records arrive as a JSON array whose keys follow the data server's
//! PascalCase column names (`AtomicNumber`, `Symbol`, `Element`, ...).
//! Numeric columns are decoded leniently: `null`, missing keys, empty or
//! non-numeric strings all become `None`, numeric strings are accepted.

pub mod category;

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::Deserialize;

pub use category::CategoryStyle;

/// One chemical element as served by the element repository.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ElementRecord {
    #[serde(deserialize_with = "lenient::atomic_number")]
    pub atomic_number: u16,
    pub symbol: String,
    #[serde(rename = "Element", default, deserialize_with = "lenient::name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::positive_f64")]
    pub atomic_mass: Option<f64>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::small_int")]
    pub group: Option<u8>,
    #[serde(default, deserialize_with = "lenient::small_int")]
    pub period: Option<u8>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub electronegativity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub atomic_radius: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub melting_point: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64")]
    pub boiling_point: Option<f64>,
}

impl ElementRecord {
    /// Minimal record, mostly useful for building fixtures.
    pub fn new(atomic_number: u16, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            atomic_number,
            symbol: symbol.into(),
            name: name.into(),
            atomic_mass: None,
            category: None,
            group: None,
            period: None,
            electronegativity: None,
            atomic_radius: None,
            melting_point: None,
            boiling_point: None,
        }
    }

    pub fn style(&self) -> CategoryStyle {
        CategoryStyle::parse(self.category.as_deref().unwrap_or(""))
    }

    /// f-block series this element belongs to, by atomic number.
    pub fn series(&self) -> Option<Series> {
        Series::from_atomic_number(self.atomic_number)
    }
}

/// The two detached f-block rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Series {
    Lanthanide,
    Actinide,
}

impl Series {
    pub const ALL: [Series; 2] = [Series::Lanthanide, Series::Actinide];

    pub const fn range(self) -> RangeInclusive<u16> {
        match self {
            Series::Lanthanide => 57..=71,
            Series::Actinide => 89..=103,
        }
    }

    /// Atomic number of the series head (La, Ac).
    pub const fn first(self) -> u16 {
        match self {
            Series::Lanthanide => 57,
            Series::Actinide => 89,
        }
    }

    pub fn from_atomic_number(z: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.range().contains(&z))
    }

    pub fn from_style(style: CategoryStyle) -> Option<Self> {
        match style {
            CategoryStyle::Lanthanide => Some(Series::Lanthanide),
            CategoryStyle::Actinide => Some(Series::Actinide),
            _ => None,
        }
    }

    pub fn style(self) -> CategoryStyle {
        match self {
            Series::Lanthanide => CategoryStyle::Lanthanide,
            Series::Actinide => CategoryStyle::Actinide,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Series::Lanthanide => "Lanthanides",
            Series::Actinide => "Actinides",
        }
    }

    /// Short range label shown on the main-table placeholder cell.
    pub const fn label(self) -> &'static str {
        match self {
            Series::Lanthanide => "57-71",
            Series::Actinide => "89-103",
        }
    }
}

/// The validated, immutable element collection.
///
/// Records are sorted by atomic number; atomic numbers and symbols are unique.
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    records: Vec<ElementRecord>,
    rejected: usize,
}

impl ElementTable {
    /// Decode a JSON array of records. Individual malformed records are
    /// skipped (and counted); only a body that is not a JSON array fails.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(body)?;
        let mut records = Vec::with_capacity(raw.len());
        let mut rejected = 0;

        for (idx, value) in raw.into_iter().enumerate() {
            match serde_json::from_value::<ElementRecord>(value) {
                Ok(record) => records.push(record),
                Err(e) => {
                    log::warn!("Skipping element record #{}: {}", idx, e);
                    rejected += 1;
                }
            }
        }

        let mut table = Self::from_records(records);
        table.rejected += rejected;
        Ok(table)
    }

    /// Build a table, enforcing the uniqueness invariants.
    ///
    /// Blank symbols are rejected; on a duplicate atomic number or symbol the
    /// first occurrence wins.
    pub fn from_records(records: Vec<ElementRecord>) -> Self {
        let mut seen_numbers = HashSet::new();
        let mut seen_symbols = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());
        let mut rejected = 0;

        for mut record in records {
            record.symbol = record.symbol.trim().to_string();
            if record.symbol.is_empty() {
                log::warn!("Skipping element {}: blank symbol", record.atomic_number);
                rejected += 1;
                continue;
            }
            if !seen_numbers.insert(record.atomic_number) {
                log::warn!(
                    "Skipping duplicate atomic number {} ({})",
                    record.atomic_number,
                    record.symbol
                );
                rejected += 1;
                continue;
            }
            if !seen_symbols.insert(record.symbol.to_lowercase()) {
                log::warn!(
                    "Skipping duplicate symbol {} (atomic number {})",
                    record.symbol,
                    record.atomic_number
                );
                seen_numbers.remove(&record.atomic_number);
                rejected += 1;
                continue;
            }
            kept.push(record);
        }

        kept.sort_by_key(|r| r.atomic_number);
        Self {
            records: kept,
            rejected,
        }
    }

    pub fn records(&self) -> &[ElementRecord] {
        &self.records
    }

    pub fn get(&self, atomic_number: u16) -> Option<&ElementRecord> {
        self.records
            .binary_search_by_key(&atomic_number, |r| r.atomic_number)
            .ok()
            .map(|idx| &self.records[idx])
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&ElementRecord> {
        self.records
            .iter()
            .find(|r| r.symbol.eq_ignore_ascii_case(symbol))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of input records dropped during decoding or validation.
    pub fn rejected(&self) -> usize {
        self.rejected
    }
}

mod lenient {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn number(value: &Value) -> Option<f64> {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|v| v.is_finite())
    }

    pub fn f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(value.as_ref().and_then(number))
    }

    pub fn positive_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(f64(d)?.filter(|v| *v > 0.0))
    }

    pub fn small_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u8>, D::Error> {
        Ok(f64(d)?
            .filter(|v| v.fract() == 0.0 && *v >= 0.0 && *v <= u8::MAX as f64)
            .map(|v| v as u8))
    }

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(match value {
            Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
    }

    /// Missing, null and blank names all decode to an empty string.
    pub fn name<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        string(d).map(Option::unwrap_or_default)
    }

    pub fn atomic_number<'de, D: Deserializer<'de>>(d: D) -> Result<u16, D::Error> {
        let value = Value::deserialize(d)?;
        number(&value)
            .filter(|v| v.fract() == 0.0 && *v >= 1.0 && *v <= u16::MAX as f64)
            .map(|v| v as u16)
            .ok_or_else(|| D::Error::custom(format!("invalid AtomicNumber: {}", value)))
    }
}
