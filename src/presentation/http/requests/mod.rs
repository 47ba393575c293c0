use poem::Body;
use serde::Deserialize;

use crate::domain::errors::DomainError;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";

/// Body of create and update requests.
///
/// Decoded from the raw body regardless of `Content-Type`. Only the first
/// JSON value is read; a `null` body or `null`/absent keys read as empty
/// strings so that they fail field validation rather than JSON parsing.
/// `id` and `created_at`, if sent, are ignored.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UserPayloadDto {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

impl UserPayloadDto {
    pub fn from_json(bytes: &[u8]) -> Result<Self, DomainError> {
        let first = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Option<UserPayloadDto>>()
            .next();

        match first {
            Some(Ok(payload)) => Ok(payload.unwrap_or_default()),
            Some(Err(err)) => Err(invalid_json(err)),
            None => Err(invalid_json("empty body")),
        }
    }

    pub async fn from_body(body: Body) -> Result<Self, DomainError> {
        let bytes = body.into_bytes().await.map_err(invalid_json)?;
        Self::from_json(&bytes)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn invalid_json(err: impl std::fmt::Display) -> DomainError {
    tracing::debug!(error = %err, "rejected request payload");
    DomainError::Validation(INVALID_JSON_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str) -> UserPayloadDto {
        UserPayloadDto {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn assert_invalid(raw: &str) {
        match UserPayloadDto::from_json(raw.as_bytes()) {
            Err(DomainError::Validation(message)) => assert_eq!(message, INVALID_JSON_MESSAGE),
            other => panic!("expected invalid JSON for {raw:?}, got {other:?}"),
        }
    }

    #[test]
    fn decodes_fields_and_ignores_unknown_keys() {
        let decoded = UserPayloadDto::from_json(
            br#"{"id": 9, "name": "Ada", "email": "ada@example.com", "created_at": "x"}"#,
        )
        .unwrap();
        assert_eq!(decoded, payload("Ada", "ada@example.com"));
    }

    #[test]
    fn null_and_missing_values_read_as_empty() {
        assert_eq!(UserPayloadDto::from_json(b"null").unwrap(), payload("", ""));
        assert_eq!(UserPayloadDto::from_json(b"{}").unwrap(), payload("", ""));
        assert_eq!(
            UserPayloadDto::from_json(br#"{"name": null, "email": "a@x"}"#).unwrap(),
            payload("", "a@x")
        );
    }

    #[test]
    fn only_the_first_value_is_read() {
        assert_eq!(
            UserPayloadDto::from_json(br#"{"name": "Ada", "email": "a@x"} trailing"#).unwrap(),
            payload("Ada", "a@x")
        );
    }

    #[test]
    fn malformed_bodies_are_invalid_json() {
        for raw in ["", "   ", "nope", "{\"name\": \"Ada\",", r#"{"name": 7}"#, "\"Ada\""] {
            assert_invalid(raw);
        }
    }
}
