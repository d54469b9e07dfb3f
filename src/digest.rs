//! Payload sealing
//!
//! Before a document is issued its payload gets a random identifier and a
//! SHA-256 digest over the serialised payload (identifier included). The
//! digest is what the document prints and encodes in its QR code, so a
//! holder of the payload can later check that the two still match.

use crate::error::{Error, Result};
use crate::payload::Payload;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;
use sha2::{Digest, Sha256};
use std::io::{self, Write};
use uuid::Uuid;

pub const UUID_FIELD: &str = "uuid";
pub const DIGEST_FIELD: &str = "digest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seal {
    pub uuid: String,
    pub digest: String,
}

impl Seal {
    pub fn reference(&self) -> String {
        reference(&self.digest)
    }
}

/// Seal `payload` with a fresh random identifier.
pub fn seal(payload: &mut Payload) -> Result<Seal> {
    seal_with_id(payload, &Uuid::new_v4().simple().to_string())
}

/// Seal `payload` with the given identifier. Any previous digest is replaced.
pub fn seal_with_id(payload: &mut Payload, id: &str) -> Result<Seal> {
    payload.shift_remove(DIGEST_FIELD);
    payload.insert(UUID_FIELD.to_string(), Value::String(id.to_string()));

    let digest = compute(payload)?;
    payload.insert(DIGEST_FIELD.to_string(), Value::String(digest.clone()));
    debug!("sealed payload {} -> {}", id, digest);

    Ok(Seal {
        uuid: id.to_string(),
        digest,
    })
}

/// Check that a sealed payload still matches its digest.
pub fn verify(payload: &Payload) -> Result<bool> {
    let expected = payload
        .get(DIGEST_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| Error::MissingField(DIGEST_FIELD.to_string()))?;
    if !payload.contains_key(UUID_FIELD) {
        return Err(Error::MissingField(UUID_FIELD.to_string()));
    }

    let mut unsealed = payload.clone();
    unsealed.shift_remove(DIGEST_FIELD);
    let actual = compute(&unsealed)?;
    debug!("verify: expected {} actual {}", expected, actual);
    Ok(actual.eq_ignore_ascii_case(expected))
}

/// Short printable reference: the first 16 hex digits in groups of four.
pub fn reference(digest: &str) -> String {
    digest
        .chars()
        .take(16)
        .collect::<Vec<_>>()
        .chunks(4)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

fn compute(payload: &Payload) -> Result<String> {
    let serialized = canonical_json(payload)?;
    let mut hasher = Sha256::new();
    hasher.update(&serialized);
    Ok(hex::encode(hasher.finalize()))
}

/// Serialise the way the issuing scripts do before hashing: `", "` and
/// `": "` separators, everything outside printable ASCII as `\uXXXX`.
pub fn canonical_json(payload: &Payload) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
    payload.serialize(&mut ser)?;
    Ok(buf)
}

struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and C0 controls never reach here; serde_json
    // escapes those itself.
    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if (' '..='~').contains(&c) {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
