//! Descriptors for creating schema elements.
//!
//! Creation is not a mutate-then-save flow: these are explicit,
//! fully-specified payloads handed to a single-shot call which returns the
//! server-assigned schema object.

use serde::Serialize;
use serde_json::Value;

/// Payload describing a table to create, used by
/// [`Base::create_table`](crate::api::Base::create_table) and as part of
/// [`Workspace::create_base`](crate::api::Workspace::create_base).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTable {
    /// Table name. Does not need to be unique within the base.
    pub name: String,
    /// Optional table description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Fields of the table. Airtable requires at least one; the first
    /// becomes the primary field.
    pub fields: Vec<NewField>,
}

impl NewTable {
    /// Creates a descriptor for a table with the given fields.
    pub fn new(name: impl Into<String>, fields: Vec<NewField>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields,
        }
    }

    /// Sets the table description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Payload describing a field to create, used by
/// [`Table::create_field`](crate::api::Table::create_field) and inside
/// [`NewTable`].
#[derive(Clone, Debug, Serialize)]
pub struct NewField {
    /// Field name.
    pub name: String,
    /// Field type, e.g. `singleLineText` or `singleSelect`.
    #[serde(rename = "type")]
    pub field_type: String,
    /// Optional field description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type-specific options, passed through to the API unchanged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl NewField {
    /// Creates a descriptor for a field of the given type.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            description: None,
            options: None,
        }
    }

    /// Sets the field description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets type-specific options.
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}
