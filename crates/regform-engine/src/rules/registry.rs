//! Form rule registry.

use regform_model::{FieldId, fields};

use super::{EMAIL, RuleKind, TEN_DIGITS};
use crate::normalize::{InputFormat, Normalize};

/// Validation contract attached to one field identifier.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: FieldId,
    /// Display label used in the success summary.
    pub label: String,
    /// A required field with an empty normalized value is always invalid.
    pub required: bool,
    pub kind: RuleKind,
    /// Cleanup applied to the raw value before evaluation.
    pub normalize: Normalize,
    /// Fixed failure message; context rules may substitute a computed one.
    pub message: String,
    /// Display formatting applied on every input event, if any.
    pub format_on_input: Option<InputFormat>,
}

/// Registry of rules in declared form order.
///
/// Order matters: the aggregate validity pass and the success summary both
/// follow it. No field without a registered rule participates in either.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Insert a rule, replacing any existing rule for the same field.
    pub fn insert(&mut self, rule: Rule) {
        self.rules.retain(|existing| existing.id != rule.id);
        self.rules.push(rule);
    }

    /// Get the rule for a field.
    pub fn get(&self, id: &FieldId) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == *id)
    }

    /// Number of rules in the registry.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over all rules in declared form order.
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// The nine rule-governed fields of the registration form.
    pub fn default_form() -> Self {
        let mut registry = Self::new();

        registry.insert(text_rule(
            fields::NOMBRE,
            "Nombre",
            "El nombre debe tener al menos 2 caracteres.",
        ));
        registry.insert(text_rule(
            fields::APELLIDOS,
            "Apellidos",
            "Los apellidos deben tener al menos 2 caracteres.",
        ));
        registry.insert(text_rule(
            fields::CIUDAD,
            "Ciudad",
            "La ciudad debe tener al menos 2 caracteres.",
        ));
        registry.insert(Rule {
            id: FieldId::from(fields::CEDULA),
            label: "Cédula".to_string(),
            required: true,
            kind: RuleKind::PatternMatch {
                pattern: &TEN_DIGITS,
            },
            normalize: Normalize::Digits,
            message: "La cédula debe tener exactamente 10 dígitos.".to_string(),
            format_on_input: Some(InputFormat::NationalId),
        });
        registry.insert(Rule {
            id: FieldId::from(fields::FECHA),
            label: "Fecha de nacimiento".to_string(),
            required: true,
            kind: RuleKind::BirthDate { min_years: 18 },
            normalize: Normalize::Raw,
            message: "Fecha de nacimiento inválida (debe ser mayor de 18 años).".to_string(),
            format_on_input: None,
        });
        registry.insert(Rule {
            id: FieldId::from(fields::PAIS),
            label: "País".to_string(),
            required: true,
            kind: RuleKind::NonEmptySelection,
            normalize: Normalize::Raw,
            message: "Selecciona un país válido.".to_string(),
            format_on_input: None,
        });
        registry.insert(Rule {
            id: FieldId::from(fields::GENERO),
            label: "Género".to_string(),
            required: true,
            kind: RuleKind::NonEmptySelection,
            normalize: Normalize::Raw,
            message: "Selecciona un género.".to_string(),
            format_on_input: None,
        });
        registry.insert(Rule {
            id: FieldId::from(fields::TELEFONO),
            label: "Teléfono".to_string(),
            required: true,
            kind: RuleKind::PatternMatch {
                pattern: &TEN_DIGITS,
            },
            normalize: Normalize::Digits,
            message: "El teléfono debe tener 10 dígitos.".to_string(),
            format_on_input: Some(InputFormat::Digits),
        });
        registry.insert(Rule {
            id: FieldId::from(fields::CORREO),
            label: "Correo".to_string(),
            required: true,
            kind: RuleKind::PatternMatch { pattern: &EMAIL },
            normalize: Normalize::Trim,
            message: "Ingresa un correo electrónico válido.".to_string(),
            format_on_input: None,
        });

        registry
    }
}

/// Plain required text field with a minimum trimmed length of two.
fn text_rule(id: &str, label: &str, message: &str) -> Rule {
    Rule {
        id: FieldId::from(id),
        label: label.to_string(),
        required: true,
        kind: RuleKind::LengthThreshold { min: 2 },
        normalize: Normalize::Trim,
        message: message.to_string(),
        format_on_input: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_form_has_nine_rules() {
        let registry = RuleRegistry::default_form();
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn test_lookup() {
        let registry = RuleRegistry::default_form();
        assert!(registry.get(&FieldId::from(fields::CEDULA)).is_some());
        assert!(registry.get(&FieldId::from("desconocido")).is_none());
    }

    #[test]
    fn test_declared_order_is_preserved() {
        let registry = RuleRegistry::default_form();
        let ids: Vec<&str> = registry.iter().map(|rule| rule.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "nombre",
                "apellidos",
                "ciudad",
                "cedula",
                "fecha",
                "pais",
                "genero",
                "telefono",
                "correo",
            ]
        );
    }

    #[test]
    fn test_only_numeric_fields_format_on_input() {
        let registry = RuleRegistry::default_form();
        let formatted: Vec<&str> = registry
            .iter()
            .filter(|rule| rule.format_on_input.is_some())
            .map(|rule| rule.id.as_str())
            .collect();
        assert_eq!(formatted, vec!["cedula", "telefono"]);
    }

    #[test]
    fn test_insert_replaces_same_field() {
        let mut registry = RuleRegistry::new();
        registry.insert(text_rule("campo", "Campo", "mensaje uno"));
        registry.insert(text_rule("campo", "Campo", "mensaje dos"));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(&FieldId::from("campo")).unwrap().message,
            "mensaje dos"
        );
    }
}
