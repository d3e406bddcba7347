//! Field identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one user-editable field in the form.
///
/// Ids mirror the form's control ids, and unknown ids are representable: a
/// field without a registered rule never participates in aggregate validity
/// or submission gating.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FieldId(String);

impl FieldId {
    /// Create a field identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Well-known field ids of the registration form.
pub mod fields {
    pub const NOMBRE: &str = "nombre";
    pub const APELLIDOS: &str = "apellidos";
    pub const CIUDAD: &str = "ciudad";
    pub const CEDULA: &str = "cedula";
    pub const FECHA: &str = "fecha";
    pub const PAIS: &str = "pais";
    pub const GENERO: &str = "genero";
    pub const TELEFONO: &str = "telefono";
    pub const CORREO: &str = "correo";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_id_display() {
        let id = FieldId::from(fields::NOMBRE);
        assert_eq!(id.as_str(), "nombre");
        assert_eq!(id.to_string(), "nombre");
    }

    #[test]
    fn test_field_id_equality() {
        assert_eq!(FieldId::from("pais"), FieldId::new("pais".to_string()));
        assert_ne!(FieldId::from("pais"), FieldId::from("genero"));
    }
}
