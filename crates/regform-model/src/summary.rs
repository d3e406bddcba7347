//! Submission success summary.

use serde::Serialize;

use crate::ids::FieldId;

/// One labeled value in the success summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryEntry {
    pub field: FieldId,
    pub label: String,
    pub value: String,
}

/// Result summary of a fully valid submission.
///
/// Entries follow registry order and cover rule-governed fields only;
/// unknown form fields are excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionSummary {
    pub entries: Vec<SummaryEntry>,
}

impl SubmissionSummary {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The submitted value for a field, if present.
    pub fn value(&self, field: &FieldId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.field == *field)
            .map(|entry| entry.value.as_str())
    }

    /// Render the summary as the plain-text report shown to the user.
    pub fn to_display(&self) -> String {
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("{}: {}", entry.label, entry.value))
            .collect();
        format!("¡Registro completado!\n\n{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rendering() {
        let summary = SubmissionSummary {
            entries: vec![
                SummaryEntry {
                    field: FieldId::from("nombre"),
                    label: "Nombre".to_string(),
                    value: "Ana".to_string(),
                },
                SummaryEntry {
                    field: FieldId::from("pais"),
                    label: "País".to_string(),
                    value: "Ecuador".to_string(),
                },
            ],
        };
        assert_eq!(
            summary.to_display(),
            "¡Registro completado!\n\nNombre: Ana\nPaís: Ecuador"
        );
    }

    #[test]
    fn test_value_lookup() {
        let summary = SubmissionSummary {
            entries: vec![SummaryEntry {
                field: FieldId::from("correo"),
                label: "Correo".to_string(),
                value: "ana@example.com".to_string(),
            }],
        };
        assert_eq!(summary.value(&FieldId::from("correo")), Some("ana@example.com"));
        assert_eq!(summary.value(&FieldId::from("nombre")), None);
    }
}
