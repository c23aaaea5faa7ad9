//! Workspace handle.
//!
//! Apart from [`Workspace::create_base`], everything here is limited to
//! enterprise billing plans; Airtable answers 404 on lesser plans and the
//! errors are enriched accordingly.

use reqwest::Method;
use serde_json::json;

use super::{require_enterprise, Base, ContextRef};
use crate::error::Result;
use crate::types::wire;
use crate::types::{CollaboratorInfo, NewTable, WorkspaceInfo};

/// Handle to a single workspace.
pub struct Workspace {
    ctx: ContextRef,
    id: String,
}

impl Workspace {
    pub(crate) fn new(ctx: ContextRef, id: String) -> Self {
        Self { ctx, id }
    }

    /// Workspace id (`wsp...`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Retrieves basic information, bases and collaborators of the
    /// workspace. Enterprise plan only.
    pub async fn info(&self) -> Result<WorkspaceInfo> {
        let url = format!(
            "{}?include=collaborators",
            self.ctx.endpoints.workspace(&self.id)
        );
        let resp = self
            .ctx
            .transport
            .request(Method::GET, &url, None)
            .await
            .map_err(|e| require_enterprise(e, "Workspace::info()"))?;
        let resp: wire::workspace::Workspace = serde_json::from_value(resp)?;
        resp.try_into()
    }

    /// Lists the collaborators of the workspace. Enterprise plan only.
    pub async fn collaborators(&self) -> Result<Vec<CollaboratorInfo>> {
        Ok(self.info().await?.collaborators)
    }

    /// Returns a [`Base`] handle per base in the workspace. Enterprise
    /// plan only.
    pub async fn bases(&self) -> Result<Vec<Base>> {
        let info = self.info().await?;
        Ok(info
            .base_ids
            .into_iter()
            .map(|id| Base::new(self.ctx.clone(), id))
            .collect())
    }

    /// Creates a base in this workspace with the given tables and returns
    /// a handle to it.
    pub async fn create_base(
        &self,
        name: impl Into<String>,
        tables: Vec<NewTable>,
    ) -> Result<Base> {
        let name = name.into();
        let url = self.ctx.endpoints.bases();
        let payload = json!({
            "name": name,
            "workspaceId": self.id,
            "tables": tables,
        });
        let resp = self
            .ctx
            .transport
            .request(Method::POST, &url, Some(&payload))
            .await?;
        let resp: wire::base::CreateBaseResponse = serde_json::from_value(resp)?;
        wire::require_id(&resp.id, "base")?;

        log::info!(
            "Created base {} with {} tables in workspace {}",
            resp.id,
            resp.tables.len(),
            self.id
        );
        Ok(Base::with_name(self.ctx.clone(), resp.id, name))
    }

    /// Moves a base into another workspace, optionally at a given position
    /// in the target's base list. Enterprise plan only.
    pub async fn move_base(
        &self,
        base_id: &str,
        target_workspace_id: &str,
        index: Option<u32>,
    ) -> Result<()> {
        let url = self.ctx.endpoints.move_base(&self.id);
        let mut payload = json!({
            "baseId": base_id,
            "targetWorkspaceId": target_workspace_id,
        });
        if let Some(index) = index {
            payload["targetIndex"] = json!(index);
        }
        self.ctx
            .transport
            .request(Method::POST, &url, Some(&payload))
            .await
            .map_err(|e| require_enterprise(e, "Workspace::move_base()"))?;

        log::info!(
            "Moved base {base_id} from workspace {} to {target_workspace_id}",
            self.id
        );
        Ok(())
    }

    /// Deletes the workspace remotely, with no confirmation step.
    /// Enterprise plan only.
    pub async fn delete(&self) -> Result<()> {
        let url = self.ctx.endpoints.workspace(&self.id);
        self.ctx
            .transport
            .request(Method::DELETE, &url, None)
            .await
            .map_err(|e| require_enterprise(e, "Workspace::delete()"))?;
        log::info!("Deleted workspace {}", self.id);
        Ok(())
    }
}
