//! Cliente domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::config::{MSG_FIELD_REQUIRED, MSG_INVALID_EMAIL};
use crate::errors::{AppError, AppResult};

/// Customer record.
///
/// `id` is `None` until the record has been persisted; the repository
/// inserts records without an id and updates records that carry one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cliente {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Ana")]
    pub nombre: String,
    #[schema(example = "Diaz")]
    pub apellido: Option<String>,
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
    /// Set once when the record is created
    pub create_at: DateTime<Utc>,
}

impl Cliente {
    /// Build an unsaved record from a validated payload.
    ///
    /// Anything the client sent for `id` or `createAt` is discarded.
    pub fn from_payload(payload: ClientePayload, create_at: DateTime<Utc>) -> AppResult<Self> {
        Ok(Self {
            id: None,
            nombre: payload.required_nombre()?,
            apellido: payload.apellido,
            email: payload.email,
            create_at,
        })
    }

    /// Overwrite the mutable fields from a validated payload.
    ///
    /// `id` and `create_at` are left as stored.
    pub fn apply(&mut self, payload: ClientePayload) -> AppResult<()> {
        self.nombre = payload.required_nombre()?;
        self.apellido = payload.apellido;
        self.email = payload.email;
        Ok(())
    }

    /// Whether the record has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Inbound create/update body.
///
/// Only the three client-editable fields are read; `id` and `createAt`
/// in the JSON are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct ClientePayload {
    #[validate(required(message = "no puede estar vacío"))]
    #[schema(example = "Ana")]
    pub nombre: Option<String>,
    #[schema(example = "Diaz")]
    pub apellido: Option<String>,
    #[validate(email(message = "no es una dirección de correo bien formada"))]
    #[schema(example = "ana@example.com")]
    pub email: Option<String>,
}

impl ClientePayload {
    /// Pre-validation normalization: an empty `nombre` counts as missing
    /// and an empty `email` counts as not given.
    pub fn normalized(mut self) -> Self {
        if self.nombre.as_deref() == Some("") {
            self.nombre = None;
        }
        if self.email.as_deref() == Some("") {
            self.email = None;
        }
        self
    }

    /// Run the declarative field rules.
    ///
    /// Callers normalize first so an empty name trips the `required` rule.
    pub fn check(&self) -> AppResult<()> {
        self.validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))
    }

    fn required_nombre(&self) -> AppResult<String> {
        self.nombre
            .clone()
            .ok_or_else(|| AppError::validation(vec![field_message("nombre", MSG_FIELD_REQUIRED)]))
    }
}

/// Format validation errors as `"El campo <field> - <message>"`, ordered by field name
pub fn format_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (field.to_string(), errs))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| default_message(&e.code));
                field_message(&field, &message)
            })
        })
        .collect()
}

fn field_message(field: &str, message: &str) -> String {
    format!("El campo {} - {}", field, message)
}

fn default_message(code: &str) -> String {
    match code {
        "required" => MSG_FIELD_REQUIRED.to_string(),
        "email" => MSG_INVALID_EMAIL.to_string(),
        other => format!("no es válido ({})", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(nombre: Option<&str>, email: Option<&str>) -> ClientePayload {
        ClientePayload {
            nombre: nombre.map(String::from),
            apellido: Some("Diaz".to_string()),
            email: email.map(String::from),
        }
    }

    #[test]
    fn test_empty_nombre_normalized_to_none() {
        let p = payload(Some(""), None).normalized();
        assert!(p.nombre.is_none());

        let p = payload(Some("Ana"), None).normalized();
        assert_eq!(p.nombre.as_deref(), Some("Ana"));
    }

    #[test]
    fn test_blank_email_is_treated_as_absent() {
        let p = payload(Some("Ana"), Some("")).normalized();
        assert!(p.email.is_none());
        assert!(p.check().is_ok());

        assert!(payload(Some("Ana"), Some("not-an-email")).normalized().check().is_err());
    }

    #[test]
    fn test_empty_nombre_rejected_after_normalization() {
        let err = payload(Some(""), None).normalized().check().unwrap_err();
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors, vec!["El campo nombre - no puede estar vacío"]);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        assert!(payload(Some("Ana"), Some("a@x.com")).normalized().check().is_ok());
        assert!(payload(Some("Ana"), None).check().is_ok());
    }

    #[test]
    fn test_errors_reported_in_field_order() {
        let err = payload(None, Some("not-an-email")).check().unwrap_err();
        match err {
            AppError::Validation(errors) => assert_eq!(
                errors,
                vec![
                    "El campo email - no es una dirección de correo bien formada",
                    "El campo nombre - no puede estar vacío",
                ]
            ),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_payload_ignores_client_id_and_create_at() {
        let json = r#"{"id": 77, "nombre": "Ana", "createAt": "1999-01-01T00:00:00Z"}"#;
        let p: ClientePayload = serde_json::from_str(json).unwrap();
        let now = Utc::now();

        let cliente = Cliente::from_payload(p, now).unwrap();
        assert_eq!(cliente.id, None);
        assert_eq!(cliente.create_at, now);
        assert!(!cliente.is_persisted());
    }

    #[test]
    fn test_apply_keeps_id_and_create_at() {
        let created = Utc::now();
        let mut cliente = Cliente {
            id: Some(5),
            nombre: "Ana".to_string(),
            apellido: None,
            email: None,
            create_at: created,
        };

        cliente
            .apply(payload(Some("Luisa"), Some("l@x.com")))
            .unwrap();

        assert_eq!(cliente.id, Some(5));
        assert_eq!(cliente.create_at, created);
        assert_eq!(cliente.nombre, "Luisa");
        assert_eq!(cliente.apellido.as_deref(), Some("Diaz"));
        assert_eq!(cliente.email.as_deref(), Some("l@x.com"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let cliente = Cliente {
            id: Some(1),
            nombre: "Ana".to_string(),
            apellido: Some("Diaz".to_string()),
            email: Some("a@x.com".to_string()),
            create_at: Utc::now(),
        };

        let json = serde_json::to_value(&cliente).unwrap();
        assert!(json.get("createAt").is_some());
        assert!(json.get("create_at").is_none());
        assert_eq!(json["nombre"], "Ana");
    }
}
