use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use stayvista_core::AppError;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();

    // Nested structs (host, guest) report under their own key
    for (field, kind) in errors.errors() {
        if let validator::ValidationErrorsKind::Struct(nested) = kind {
            messages.push(format!("{}: {}", field, format_errors(nested)));
        }
    }

    messages.join(", ")
}

fn quoted_after<'a>(message: &'a str, marker: &str) -> Option<&'a str> {
    message
        .split(marker)
        .nth(1)
        .and_then(|rest| rest.split('`').next())
}

/// JSON body extractor that also runs `validator` rules.
///
/// Malformed bodies, missing fields and out-of-set enum values are rejected
/// with 400; rule violations with 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if let Some(field) = quoted_after(&error_msg, "missing field `") {
                    return AppError::bad_request(anyhow!("{} is required", field));
                }

                if let Some(variant) = quoted_after(&error_msg, "unknown variant `") {
                    return AppError::bad_request(anyhow!("Unsupported value `{}`", variant));
                }

                if error_msg.contains("invalid type") || error_msg.contains("invalid value") {
                    return AppError::bad_request(anyhow!("Invalid field type in request"));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}
