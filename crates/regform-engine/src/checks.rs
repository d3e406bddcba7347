//! Rule evaluation.

use chrono::NaiveDate;

use regform_model::ValidationOutcome;

use crate::rules::RuleKind;

/// Failure message for a birth date later than today.
const FUTURE_DATE_MSG: &str = "La fecha no puede ser en el futuro.";

/// Date format of the birth-date control.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Evaluate a rule kind against a normalized value.
///
/// `message` is the rule's fixed failure message; the birth-date check may
/// substitute a computed one. `today` is passed in so the check stays a pure
/// function of its inputs.
pub fn evaluate(
    kind: &RuleKind,
    normalized: &str,
    message: &str,
    today: NaiveDate,
) -> ValidationOutcome {
    match kind {
        RuleKind::LengthThreshold { min } => {
            if normalized.chars().count() >= *min {
                ValidationOutcome::Valid
            } else {
                ValidationOutcome::invalid(message)
            }
        }
        RuleKind::PatternMatch { pattern } => {
            if pattern.is_match(normalized) {
                ValidationOutcome::Valid
            } else {
                ValidationOutcome::invalid(message)
            }
        }
        RuleKind::BirthDate { min_years } => {
            evaluate_birth_date(normalized, *min_years, message, today)
        }
        RuleKind::NonEmptySelection => {
            if normalized.is_empty() {
                ValidationOutcome::invalid(message)
            } else {
                ValidationOutcome::Valid
            }
        }
    }
}

/// Birth-date check: rejects unparseable values, future dates, and ages
/// below the threshold, embedding the computed age in the message.
fn evaluate_birth_date(
    value: &str,
    min_years: u32,
    message: &str,
    today: NaiveDate,
) -> ValidationOutcome {
    let Ok(birth) = NaiveDate::parse_from_str(value, DATE_FORMAT) else {
        return ValidationOutcome::invalid(message);
    };

    if birth > today {
        return ValidationOutcome::invalid(FUTURE_DATE_MSG);
    }

    // Whole calendar years, so an exact 18th birthday counts as 18.
    let age = today.years_since(birth).unwrap_or(0);
    if age < min_years {
        return ValidationOutcome::invalid(format!(
            "Edad calculada: {age} años. Debe ser mayor de {min_years}."
        ));
    }

    ValidationOutcome::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
    }

    fn birth_date(value: &str) -> ValidationOutcome {
        evaluate(
            &RuleKind::BirthDate { min_years: 18 },
            value,
            "Fecha de nacimiento inválida (debe ser mayor de 18 años).",
            today(),
        )
    }

    #[test]
    fn test_length_threshold() {
        let kind = RuleKind::LengthThreshold { min: 2 };
        assert!(evaluate(&kind, "Ana", "msg", today()).is_valid());
        assert!(evaluate(&kind, "ñu", "msg", today()).is_valid());
        assert_eq!(
            evaluate(&kind, "A", "msg", today()),
            ValidationOutcome::invalid("msg")
        );
    }

    #[test]
    fn test_non_empty_selection() {
        let kind = RuleKind::NonEmptySelection;
        assert!(evaluate(&kind, "Ecuador", "msg", today()).is_valid());
        assert!(!evaluate(&kind, "", "msg", today()).is_valid());
    }

    #[test]
    fn test_birth_date_day_before_eighteenth_birthday() {
        assert_eq!(
            birth_date("2008-08-08"),
            ValidationOutcome::invalid("Edad calculada: 17 años. Debe ser mayor de 18.")
        );
    }

    #[test]
    fn test_birth_date_exact_eighteenth_birthday() {
        assert!(birth_date("2008-08-07").is_valid());
    }

    #[test]
    fn test_birth_date_future() {
        assert_eq!(
            birth_date("2027-01-01"),
            ValidationOutcome::invalid("La fecha no puede ser en el futuro.")
        );
    }

    #[test]
    fn test_birth_date_unparseable_uses_fixed_message() {
        assert_eq!(
            birth_date("no es una fecha"),
            ValidationOutcome::invalid(
                "Fecha de nacimiento inválida (debe ser mayor de 18 años)."
            )
        );
    }
}
