//! Base handle.

use reqwest::Method;

use super::{require_enterprise, ContextRef, Table};
use crate::error::Result;
use crate::types::wire;
use crate::types::{BaseCollaborators, BaseSchema, NewTable, ShareInfo, TableSchema};

/// Handle to a single base.
///
/// Handles are cheap and perform no requests until a method needing the
/// network is called.
pub struct Base {
    ctx: ContextRef,
    id: String,
    name: Option<String>,
}

impl Base {
    pub(crate) fn new(ctx: ContextRef, id: String) -> Self {
        Self {
            ctx,
            id,
            name: None,
        }
    }

    pub(crate) fn with_name(ctx: ContextRef, id: String, name: String) -> Self {
        Self {
            ctx,
            id,
            name: Some(name),
        }
    }

    /// Base id (`app...`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Base name, when known.
    ///
    /// Populated by [`Api::bases`](super::Api::bases) and
    /// [`Workspace::create_base`](super::Workspace::create_base); handles
    /// built directly from an id carry no name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Fetches the full schema of the base: all tables with their fields
    /// and views.
    pub async fn schema(&self) -> Result<BaseSchema> {
        let url = self.ctx.endpoints.base_tables(&self.id);
        let resp = self.ctx.transport.request(Method::GET, &url, None).await?;
        let resp: wire::table::TablesResponse = serde_json::from_value(resp)?;
        BaseSchema::from_wire(self.ctx.clone(), self.id.clone(), self.name.clone(), resp)
    }

    /// Fetches the schema and returns a [`Table`] handle per table.
    pub async fn tables(&self) -> Result<Vec<Table>> {
        let schema = self.schema().await?;
        Ok(schema
            .tables()
            .iter()
            .map(|t| Table::new(self.ctx.clone(), self.id.clone(), t.id().to_string()))
            .collect())
    }

    /// Returns a handle to a table by id or name. No network call; the
    /// name is resolved when the handle is first used.
    pub fn table(&self, id_or_name: impl Into<String>) -> Table {
        Table::new(self.ctx.clone(), self.id.clone(), id_or_name.into())
    }

    /// Creates a table in this base and returns its schema with
    /// server-assigned ids.
    pub async fn create_table(&self, table: NewTable) -> Result<TableSchema> {
        let url = self.ctx.endpoints.base_tables(&self.id);
        let payload = serde_json::to_value(&table)?;
        let resp = self
            .ctx
            .transport
            .request(Method::POST, &url, Some(&payload))
            .await?;
        let resp: wire::table::Table = serde_json::from_value(resp)?;

        log::info!("Created table {} in base {}", resp.id, self.id);
        TableSchema::from_wire(self.ctx.clone(), &self.id, resp)
    }

    /// Lists the collaborators of this base. Enterprise plan only.
    pub async fn collaborators(&self) -> Result<BaseCollaborators> {
        let url = format!("{}?include=collaborators", self.ctx.endpoints.base(&self.id));
        let resp = self
            .ctx
            .transport
            .request(Method::GET, &url, None)
            .await
            .map_err(|e| require_enterprise(e, "Base::collaborators()"))?;
        let resp: wire::collaborator::BaseCollaboratorsResponse = serde_json::from_value(resp)?;
        resp.try_into()
    }

    /// Lists the share links of this base. Enterprise plan only.
    pub async fn shares(&self) -> Result<Vec<ShareInfo>> {
        let url = self.ctx.endpoints.base_shares(&self.id);
        let resp = self
            .ctx
            .transport
            .request(Method::GET, &url, None)
            .await
            .map_err(|e| require_enterprise(e, "Base::shares()"))?;
        let resp: wire::collaborator::SharesResponse = serde_json::from_value(resp)?;
        resp.shares.into_iter().map(ShareInfo::try_from).collect()
    }

    /// Deletes the base remotely, with no confirmation step.
    ///
    /// The handle itself stays usable in the sense that further calls will
    /// simply fail remotely; no local invalidation is performed.
    pub async fn delete(&self) -> Result<()> {
        let url = self.ctx.endpoints.base(&self.id);
        self.ctx
            .transport
            .request(Method::DELETE, &url, None)
            .await?;
        log::info!("Deleted base {}", self.id);
        Ok(())
    }
}

// Tables and fields can be created but never deleted through this API, so
// neither `Base::table(...)` handles nor the schema objects expose one.
