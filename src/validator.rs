//! Request validation.
//!
//! Every request DTO declares a [`JsonContract`]: its fields, their
//! primitive kinds, and whether they are required, in declaration order.
//! The [`ValidatedJson`] extractor checks the raw JSON body against that
//! contract before deserializing, collecting an issue for *every* violated
//! field rather than bailing on the first, then runs the DTO's
//! [`Validate`] refinements (email format, minimum lengths) the same way.
//! Handlers therefore only ever see values that satisfy their contract.
//!
//! Unknown fields are ignored, not rejected, so contracts stay
//! forward-compatible.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::{AppError, ValidationIssue};

/// Primitive kind a field must carry on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
}

/// One field of an endpoint's input contract.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }
}

/// Static input contract of a request DTO. `FIELDS` must list the DTO's
/// fields in declaration order; issue ordering follows it.
pub trait JsonContract {
    const FIELDS: &'static [FieldSpec];
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + JsonContract,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => {
                    AppError::bad_request("Missing 'Content-Type: application/json' header")
                }
                _ => AppError::bad_request("Invalid request body"),
            })?;

        let body = match &value {
            Value::Object(map) => map,
            _ => return Err(AppError::bad_request("Request body must be a JSON object")),
        };

        let issues = structural_issues(T::FIELDS, body);
        if !issues.is_empty() {
            return Err(AppError::validation(issues));
        }

        // Cannot fail on fields covered by the structural pass above.
        let parsed: T = serde_json::from_value(value)
            .map_err(|_| AppError::bad_request("Invalid request body"))?;

        if let Err(errors) = parsed.validate() {
            return Err(AppError::validation(refinement_issues(T::FIELDS, &errors)));
        }

        Ok(ValidatedJson(parsed))
    }
}

/// Check presence and primitive kind for each contract field, in
/// declaration order. `null` counts as absent.
fn structural_issues(
    fields: &[FieldSpec],
    body: &serde_json::Map<String, Value>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for spec in fields {
        match body.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    issues.push(ValidationIssue::new(
                        spec.name,
                        format!("{} is required", spec.name),
                    ));
                }
            }
            Some(value) => {
                let matches_kind = match spec.kind {
                    FieldKind::String => value.is_string(),
                    FieldKind::Number => value.is_number(),
                };
                if !matches_kind {
                    let expected = match spec.kind {
                        FieldKind::String => "a string",
                        FieldKind::Number => "a number",
                    };
                    issues.push(ValidationIssue::new(
                        spec.name,
                        format!("{} must be {}", spec.name, expected),
                    ));
                }
            }
        }
    }

    issues
}

/// Flatten `validator` refinement errors into issues ordered by the
/// contract's field declaration order.
fn refinement_issues(fields: &[FieldSpec], errors: &ValidationErrors) -> Vec<ValidationIssue> {
    let field_errors = errors.field_errors();
    let mut issues = Vec::new();

    for spec in fields {
        if let Some(errs) = field_errors.get(spec.name) {
            for err in errs.iter() {
                let message = err
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", spec.name));
                issues.push(ValidationIssue::new(spec.name, message));
            }
        }
    }

    issues
}
