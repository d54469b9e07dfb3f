//! JSON payloads describing one document
//!
//! A payload is a flat JSON object of field name to value. Key order is kept
//! as read, since the digest is computed over the serialised object.

use crate::error::{Error, Result};
use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

pub type Payload = Map<String, Value>;

/// Read a payload file. The top level must be a JSON object.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Payload> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let payload = from_str(&text)?;
    debug!("loaded payload {} with {} fields", path.display(), payload.len());
    Ok(payload)
}

pub fn from_str(text: &str) -> Result<Payload> {
    match serde_json::from_str(text)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::NotAnObject),
    }
}

/// Write a payload as pretty-printed JSON.
pub fn save<P: AsRef<Path>>(path: P, payload: &Payload) -> Result<()> {
    let text = serde_json::to_string_pretty(payload)?;
    fs::write(path, text)?;
    Ok(())
}

/// A required string field.
pub fn text_field<'a>(payload: &'a Payload, key: &str) -> Result<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MissingField(key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_requires_object() {
        assert!(from_str(r#"{"name": "Μαρία"}"#).is_ok());
        assert!(matches!(from_str("[1, 2]"), Err(Error::NotAnObject)));
        assert!(matches!(from_str("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let payload = from_str(r#"{"zeta": "1", "alpha": "2", "mid": "3"}"#).unwrap();
        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_text_field() {
        let payload = from_str(r#"{"birthdate": "23/03/1990", "count": 3}"#).unwrap();
        assert_eq!(text_field(&payload, "birthdate").unwrap(), "23/03/1990");
        assert!(matches!(text_field(&payload, "count"), Err(Error::MissingField(_))));
        assert!(matches!(text_field(&payload, "surname"), Err(Error::MissingField(_))));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.json");
        let payload = from_str(r#"{"surname": "Παπαδοπούλου", "birthdate": "01/01/2000"}"#).unwrap();
        save(&path, &payload).unwrap();
        assert_eq!(load(&path).unwrap(), payload);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(load("/nonexistent/payload.json"), Err(Error::Io(_))));
    }
}
