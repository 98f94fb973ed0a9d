//! Contents of the detail panel.

use crate::element::{ElementRecord, Series};

/// Marker for attributes the dataset does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct DetailLine {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    /// Nothing selected yet.
    Prompt,
    Loading,
    Element {
        title: String,
        lines: Vec<DetailLine>,
    },
    /// Explanatory text, e.g. for the f-block placeholders.
    Note(String),
    Error(String),
}

fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string())
}

fn with_unit(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{} {}", v, unit))
}

fn text_or_na(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

impl DetailView {
    pub fn for_record(record: &ElementRecord) -> Self {
        let line = |label, value| DetailLine { label, value };
        Self::Element {
            title: format!("{} ({})", text_or_na(&record.name), record.symbol),
            lines: vec![
                line("Atomic Number", record.atomic_number.to_string()),
                line(
                    "Atomic Mass",
                    or_na(record.atomic_mass.map(|m| format!("{:.3}", m))),
                ),
                line("Category", text_or_na(record.category.as_deref().unwrap_or(""))),
                line("Group", or_na(record.group)),
                line("Period", or_na(record.period)),
                line("Electronegativity", or_na(record.electronegativity)),
                line("Atomic Radius", with_unit(record.atomic_radius, "pm")),
                line("Melting Point", with_unit(record.melting_point, "K")),
                line("Boiling Point", with_unit(record.boiling_point, "K")),
            ],
        }
    }

    pub fn for_series(series: Series) -> Self {
        let range = series.range();
        Self::Note(format!(
            "{} (elements {}-{}) are displayed below in the f-block.",
            series.name(),
            range.start(),
            range.end()
        ))
    }

    /// Plain-text rendering, one line per attribute.
    pub fn text(&self) -> String {
        match self {
            DetailView::Prompt => "Click an element to see its details.".to_string(),
            DetailView::Loading => "Loading periodic table data...".to_string(),
            DetailView::Element { title, lines } => {
                let mut out = title.clone();
                for l in lines {
                    out.push('\n');
                    out.push_str(l.label);
                    out.push_str(": ");
                    out.push_str(&l.value);
                }
                out
            }
            DetailView::Note(msg) | DetailView::Error(msg) => msg.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DetailView::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hydrogen() -> ElementRecord {
        let mut h = ElementRecord::new(1, "H", "Hydrogen");
        h.atomic_mass = Some(1.008);
        h.category = Some("nonmetal".into());
        h.group = Some(1);
        h.period = Some(1);
        h.electronegativity = Some(2.2);
        h.atomic_radius = Some(53.0);
        h
    }

    fn value(view: &DetailView, label: &str) -> String {
        match view {
            DetailView::Element { lines, .. } => lines
                .iter()
                .find(|l| l.label == label)
                .map(|l| l.value.clone())
                .unwrap(),
            other => panic!("expected element view, got {:?}", other),
        }
    }

    #[test]
    fn hydrogen_detail() {
        let view = DetailView::for_record(&hydrogen());
        let text = view.text();
        assert!(text.starts_with("Hydrogen (H)"));
        assert!(text.contains("1.008"));
        assert_eq!(value(&view, "Atomic Number"), "1");
        assert_eq!(value(&view, "Atomic Mass"), "1.008");
        assert_eq!(value(&view, "Category"), "nonmetal");
        assert_eq!(value(&view, "Group"), "1");
        assert_eq!(value(&view, "Electronegativity"), "2.2");
        assert_eq!(value(&view, "Atomic Radius"), "53 pm");
    }

    #[test]
    fn mass_has_three_decimals() {
        let mut fe = ElementRecord::new(26, "Fe", "Iron");
        fe.atomic_mass = Some(55.845_12);
        assert_eq!(value(&DetailView::for_record(&fe), "Atomic Mass"), "55.845");
        fe.atomic_mass = Some(56.0);
        assert_eq!(value(&DetailView::for_record(&fe), "Atomic Mass"), "56.000");
    }

    #[test]
    fn missing_fields_show_marker() {
        let view = DetailView::for_record(&ElementRecord::new(118, "Og", "Oganesson"));
        for label in [
            "Atomic Mass",
            "Category",
            "Group",
            "Period",
            "Electronegativity",
            "Atomic Radius",
            "Melting Point",
            "Boiling Point",
        ] {
            assert_eq!(value(&view, label), NOT_AVAILABLE, "{}", label);
        }
    }

    #[test]
    fn series_note() {
        let text = DetailView::for_series(Series::Actinide).text();
        assert!(text.contains("Actinides"));
        assert!(text.contains("89-103"));
    }
}
