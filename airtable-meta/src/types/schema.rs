//! In-memory schema objects.
//!
//! Every object here is a local snapshot of remote state, fetched through a
//! handle in [`crate::api`]. Snapshots carry no version token: two
//! snapshots of the same entity fetched at different times may disagree,
//! and `save()` is last-writer-wins.
//!
//! Mutation follows a mutate-then-save protocol: setters update the local
//! value and record the attribute in a change-set; `save()` sends one
//! partial update containing exactly the recorded attributes. Setters and
//! `save()` take `&mut self`, so exclusive ownership is the only
//! synchronization needed around the dirty set.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::Method;
use serde_json::{json, Value};

use crate::api::{ApiContext, ContextRef};
use crate::types::wire;
use crate::{Error, ErrorKind, Result};

/// Dirty attributes of a schema object: an explicit mapping from attribute
/// name to its new value, consumed by `save()`.
#[derive(Debug, Default, Clone)]
pub(crate) struct ChangeSet {
    changes: BTreeMap<&'static str, Value>,
}

impl ChangeSet {
    pub(crate) fn record(&mut self, attr: &'static str, value: Value) {
        self.changes.insert(attr, value);
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// The partial-update request body: exactly the dirty attributes,
    /// nothing else. Airtable's schema-update endpoints reject unknown
    /// members, so a full snapshot is never sent.
    pub(crate) fn to_payload(&self) -> Value {
        Value::Object(
            self.changes
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    pub(crate) fn clear(&mut self) {
        self.changes.clear();
    }
}

/// Sends the dirty attributes of a schema object to its canonical URL.
///
/// Returns `Ok(None)` without touching the network when nothing is dirty.
/// The caller clears the change-set only after a successful response, so a
/// failed save leaves it intact and retryable.
async fn push_changes(ctx: &ApiContext, url: &str, changes: &ChangeSet) -> Result<Option<Value>> {
    if changes.is_empty() {
        return Ok(None);
    }

    let payload = changes.to_payload();
    let resp = ctx
        .transport
        .request(Method::PATCH, url, Some(&payload))
        .await?;
    Ok(Some(resp))
}

/// Adopts server-returned canonical values after a successful save.
fn adopt_canonical(resp: &Value, name: &mut String, description: &mut Option<String>) {
    if let Some(v) = resp.get("name").and_then(Value::as_str) {
        *name = v.to_string();
    }
    match resp.get("description") {
        Some(Value::String(s)) => *description = Some(s.clone()),
        Some(Value::Null) => *description = None,
        _ => {}
    }
}

fn not_found(what: &str, name: &str) -> Error {
    Error::new(
        ErrorKind::NotFound,
        format!("no {what} named or with id {name:?}"),
    )
}

/// Schema of a base: its tables, with their fields and views.
pub struct BaseSchema {
    ctx: ContextRef,
    id: String,
    name: Option<String>,
    tables: Vec<TableSchema>,
    changes: ChangeSet,
}

impl BaseSchema {
    pub(crate) fn from_wire(
        ctx: ContextRef,
        id: String,
        name: Option<String>,
        resp: wire::table::TablesResponse,
    ) -> Result<Self> {
        wire::require_id(&id, "base")?;
        let tables = resp
            .tables
            .into_iter()
            .map(|t| TableSchema::from_wire(ctx.clone(), &id, t))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ctx,
            id,
            name,
            tables,
            changes: ChangeSet::default(),
        })
    }

    /// Base id (`app...`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Base name, when known at fetch time.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Tables of the base, in the order Airtable returns them.
    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    /// Mutable access to the tables, for mutate-then-save flows.
    pub fn tables_mut(&mut self) -> &mut [TableSchema] {
        &mut self.tables
    }

    /// Finds a table by name or id.
    ///
    /// Linear search over the fetched collection; on duplicate names the
    /// first match wins. Fails with [`ErrorKind::NotFound`] on a miss.
    pub fn table(&self, name: &str) -> Result<&TableSchema> {
        self.tables
            .iter()
            .find(|t| t.id == name || t.name == name)
            .ok_or_else(|| not_found("table", name))
    }

    /// Mutable variant of [`BaseSchema::table`]. Same first-match policy.
    pub fn table_mut(&mut self, name: &str) -> Result<&mut TableSchema> {
        self.tables
            .iter_mut()
            .find(|t| t.id == name || t.name == name)
            .ok_or_else(|| not_found("table", name))
    }

    /// Renames the base locally and marks `name` dirty. Nothing is sent
    /// until [`BaseSchema::save`].
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.changes.record("name", json!(name));
        self.name = Some(name);
    }

    /// Persists pending edits, if any, with a single partial update.
    pub async fn save(&mut self) -> Result<()> {
        let url = self.ctx.endpoints.base(&self.id);
        if let Some(resp) = push_changes(&self.ctx, &url, &self.changes).await? {
            if let Some(v) = resp.get("name").and_then(Value::as_str) {
                self.name = Some(v.to_string());
            }
            self.changes.clear();
        }
        Ok(())
    }
}

// The shared context holds a `dyn Transport`, so Debug is written out by
// hand and skips it.
impl fmt::Debug for BaseSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseSchema")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("tables", &self.tables)
            .field("changes", &self.changes)
            .finish()
    }
}

/// Schema of a single table: identity, fields and views.
pub struct TableSchema {
    ctx: ContextRef,
    base_id: String,
    id: String,
    name: String,
    description: Option<String>,
    primary_field_id: Option<String>,
    fields: Vec<FieldSchema>,
    views: Vec<ViewSchema>,
    changes: ChangeSet,
}

impl TableSchema {
    pub(crate) fn from_wire(ctx: ContextRef, base_id: &str, w: wire::table::Table) -> Result<Self> {
        wire::require_id(&w.id, "table")?;

        let fields = w
            .fields
            .into_iter()
            .map(|f| FieldSchema::from_wire(ctx.clone(), base_id, &w.id, f))
            .collect::<Result<Vec<_>>>()?;
        let views = w
            .views
            .into_iter()
            .map(|v| ViewSchema::from_wire(ctx.clone(), base_id, &w.id, v))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            ctx,
            base_id: base_id.to_string(),
            id: w.id,
            name: w.name,
            description: w.description,
            primary_field_id: w.primary_field_id,
            fields,
            views,
            changes: ChangeSet::default(),
        })
    }

    /// Table id (`tbl...`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the base owning this table.
    pub fn base_id(&self) -> &str {
        &self.base_id
    }

    /// Table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Table description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Id of the primary field.
    pub fn primary_field_id(&self) -> Option<&str> {
        self.primary_field_id.as_deref()
    }

    /// Fields of the table, in the order Airtable returns them.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Views of the table, in the order Airtable returns them.
    pub fn views(&self) -> &[ViewSchema] {
        &self.views
    }

    /// Finds a field by name or id.
    ///
    /// Linear search over the fetched collection; on duplicate names the
    /// first match wins. Fails with [`ErrorKind::NotFound`] on a miss.
    pub fn field(&self, name: &str) -> Result<&FieldSchema> {
        self.fields
            .iter()
            .find(|f| f.id == name || f.name == name)
            .ok_or_else(|| not_found("field", name))
    }

    /// Mutable variant of [`TableSchema::field`]. Same first-match policy.
    pub fn field_mut(&mut self, name: &str) -> Result<&mut FieldSchema> {
        self.fields
            .iter_mut()
            .find(|f| f.id == name || f.name == name)
            .ok_or_else(|| not_found("field", name))
    }

    /// Finds a view by name or id. First match wins on duplicates; fails
    /// with [`ErrorKind::NotFound`] on a miss.
    pub fn view(&self, name: &str) -> Result<&ViewSchema> {
        self.views
            .iter()
            .find(|v| v.id == name || v.name == name)
            .ok_or_else(|| not_found("view", name))
    }

    /// Mutable variant of [`TableSchema::view`], needed for
    /// [`ViewSchema::delete`].
    pub fn view_mut(&mut self, name: &str) -> Result<&mut ViewSchema> {
        self.views
            .iter_mut()
            .find(|v| v.id == name || v.name == name)
            .ok_or_else(|| not_found("view", name))
    }

    /// Renames the table locally and marks `name` dirty.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.changes.record("name", json!(name));
        self.name = name;
    }

    /// Updates the description locally and marks `description` dirty.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.changes.record("description", json!(description));
        self.description = Some(description);
    }

    /// Persists pending edits, if any, with a single partial update.
    ///
    /// A no-op when nothing is dirty. On failure the dirty set and local
    /// values are kept, so the call can simply be retried.
    pub async fn save(&mut self) -> Result<()> {
        let url = self.ctx.endpoints.table(&self.base_id, &self.id);
        if let Some(resp) = push_changes(&self.ctx, &url, &self.changes).await? {
            adopt_canonical(&resp, &mut self.name, &mut self.description);
            self.changes.clear();
        }
        Ok(())
    }
}

impl fmt::Debug for TableSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableSchema")
            .field("base_id", &self.base_id)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("primary_field_id", &self.primary_field_id)
            .field("fields", &self.fields)
            .field("views", &self.views)
            .field("changes", &self.changes)
            .finish()
    }
}

/// Schema of a single field.
///
/// Belongs to exactly one table, referenced by id only; the back-reference
/// does not keep the table alive.
pub struct FieldSchema {
    ctx: ContextRef,
    base_id: String,
    table_id: String,
    id: String,
    name: String,
    description: Option<String>,
    field_type: String,
    options: Option<Value>,
    changes: ChangeSet,
}

impl FieldSchema {
    pub(crate) fn from_wire(
        ctx: ContextRef,
        base_id: &str,
        table_id: &str,
        w: wire::field::Field,
    ) -> Result<Self> {
        wire::require_id(&w.id, "field")?;

        Ok(Self {
            ctx,
            base_id: base_id.to_string(),
            table_id: table_id.to_string(),
            id: w.id,
            name: w.name,
            description: w.description,
            field_type: w.field_type,
            options: w.options,
            changes: ChangeSet::default(),
        })
    }

    /// Field id (`fld...`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the table owning this field.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Field type, e.g. `singleLineText`. Load-only; Airtable does not
    /// allow changing a field's type through this surface.
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    /// Type-specific options, opaque to this library. Load-only.
    pub fn options(&self) -> Option<&Value> {
        self.options.as_ref()
    }

    /// Renames the field locally and marks `name` dirty.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.changes.record("name", json!(name));
        self.name = name;
    }

    /// Updates the description locally and marks `description` dirty.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        self.changes.record("description", json!(description));
        self.description = Some(description);
    }

    /// Persists pending edits, if any, with a single partial update.
    ///
    /// A no-op when nothing is dirty. On failure the dirty set and local
    /// values are kept, so the call can simply be retried.
    pub async fn save(&mut self) -> Result<()> {
        let url = self
            .ctx
            .endpoints
            .field(&self.base_id, &self.table_id, &self.id);
        if let Some(resp) = push_changes(&self.ctx, &url, &self.changes).await? {
            adopt_canonical(&resp, &mut self.name, &mut self.description);
            self.changes.clear();
        }
        Ok(())
    }
}

impl fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSchema")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("description", &self.description)
            .field("field_type", &self.field_type)
            .field("options", &self.options)
            .field("changes", &self.changes)
            .finish()
    }
}

/// Schema of a single view. Read-only apart from [`ViewSchema::delete`].
pub struct ViewSchema {
    ctx: ContextRef,
    base_id: String,
    table_id: String,
    id: String,
    name: String,
    view_type: String,
    deleted: bool,
}

impl ViewSchema {
    pub(crate) fn from_wire(
        ctx: ContextRef,
        base_id: &str,
        table_id: &str,
        w: wire::view::View,
    ) -> Result<Self> {
        wire::require_id(&w.id, "view")?;

        Ok(Self {
            ctx,
            base_id: base_id.to_string(),
            table_id: table_id.to_string(),
            id: w.id,
            name: w.name,
            view_type: w.view_type,
            deleted: false,
        })
    }

    /// View id (`viw...`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the table owning this view.
    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// View name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// View type, e.g. `grid`.
    pub fn view_type(&self) -> &str {
        &self.view_type
    }

    /// Deletes the view remotely, with no confirmation step.
    ///
    /// The local object is marked deleted and refuses further use. Other
    /// snapshots holding the same view are not invalidated.
    pub async fn delete(&mut self) -> Result<()> {
        if self.deleted {
            return Err(Error::new(
                ErrorKind::Unexpected,
                format!("view {} has already been deleted", self.id),
            ));
        }

        let url = self.ctx.endpoints.view(&self.base_id, &self.id);
        self.ctx.transport.request(Method::DELETE, &url, None).await?;
        log::info!("Deleted view {} from table {}", self.id, self.table_id);
        self.deleted = true;
        Ok(())
    }
}

impl fmt::Debug for ViewSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewSchema")
            .field("base_id", &self.base_id)
            .field("table_id", &self.table_id)
            .field("id", &self.id)
            .field("name", &self.name)
            .field("view_type", &self.view_type)
            .field("deleted", &self.deleted)
            .finish()
    }
}
