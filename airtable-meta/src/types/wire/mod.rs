//! Serde representations of the JSON documents the Airtable API sends and
//! receives.
//!
//! Everything in here is a transcription of upstream shapes. Conversion
//! into the crate's typed model happens through explicit fallible
//! conversions that reject malformed documents with
//! [`ErrorKind::SchemaInvalid`](crate::ErrorKind::SchemaInvalid) instead of
//! defaulting missing members.

pub(crate) mod base;
pub(crate) mod collaborator;
pub(crate) mod enterprise;
pub(crate) mod field;
pub(crate) mod table;
pub(crate) mod view;
pub(crate) mod workspace;

use crate::{Error, ErrorKind, Result};

/// Rejects blank identifiers.
///
/// Airtable never emits empty ids; a blank one means we are looking at a
/// document that is not what we asked for.
pub(crate) fn require_id(id: &str, what: &'static str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::new(
            ErrorKind::SchemaInvalid,
            format!("{what} document carries an empty id"),
        ));
    }
    Ok(())
}
