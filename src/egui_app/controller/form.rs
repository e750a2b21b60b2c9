//! Text-to-number conversion for the student form.

use crate::egui_app::state::StudentForm;
use crate::prediction::StudentInput;

/// Shown when any field fails to parse.
pub const VALIDATION_NOTICE: &str = "Please fill in all fields correctly.";

/// Parse a decimal typed with either `,` or `.` as the separator.
///
/// Empty text, non-numeric text, and values that do not fit in a finite `f64`
/// are rejected. No range checks are applied.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.replace(',', ".");
    let value: f64 = normalized.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

impl StudentForm {
    /// All four fields as numbers, or `None` if any of them is invalid.
    pub fn parse(&self) -> Option<StudentInput> {
        Some(StudentInput {
            faltas: parse_decimal(&self.faltas)?,
            nota_media: parse_decimal(&self.nota_media)?,
            horas_trabalho: parse_decimal(&self.horas_trabalho)?,
            idade: parse_decimal(&self.idade)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(values: [&str; 4]) -> StudentForm {
        StudentForm {
            faltas: values[0].into(),
            nota_media: values[1].into(),
            horas_trabalho: values[2].into(),
            idade: values[3].into(),
        }
    }

    #[test]
    fn comma_and_period_separators_agree() {
        assert_eq!(parse_decimal("7,5"), Some(7.5));
        assert_eq!(parse_decimal("7,5"), parse_decimal("7.5"));
        assert_eq!(parse_decimal(" 12,25\n"), Some(12.25));
    }

    #[test]
    fn comma_form_parses_identically_in_every_field() {
        let with_commas = form(["3,0", "7,5", "20,5", "19,0"]).parse().unwrap();
        let with_periods = form(["3.0", "7.5", "20.5", "19.0"]).parse().unwrap();
        assert_eq!(with_commas, with_periods);
    }

    #[test]
    fn rejects_empty_and_non_numeric_text() {
        for text in ["", "   ", "abc", "7,5,1", "1.2.3", "seven"] {
            assert_eq!(parse_decimal(text), None, "{text:?}");
        }
    }

    #[test]
    fn rejects_values_outside_finite_range() {
        assert_eq!(parse_decimal("1e400"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
    }

    #[test]
    fn accepts_negative_values() {
        assert_eq!(parse_decimal("-3"), Some(-3.0));
    }

    #[test]
    fn any_invalid_field_rejects_the_whole_form() {
        assert!(form(["3", "7.5", "20", "19"]).parse().is_some());
        assert!(form(["", "7.5", "20", "19"]).parse().is_none());
        assert!(form(["3", "x", "20", "19"]).parse().is_none());
        assert!(form(["3", "7.5", "", "19"]).parse().is_none());
        assert!(form(["3", "7.5", "20", "old"]).parse().is_none());
    }
}
