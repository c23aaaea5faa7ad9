//! Enterprise account handle.

use reqwest::Method;

use super::{require_enterprise, ContextRef};
use crate::error::Result;
use crate::types::wire;
use crate::types::EnterpriseInfo;

/// Handle to an enterprise account.
pub struct Enterprise {
    ctx: ContextRef,
    id: String,
}

impl Enterprise {
    pub(crate) fn new(ctx: ContextRef, id: String) -> Self {
        Self { ctx, id }
    }

    /// Enterprise account id (`ent...`).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Retrieves information about the enterprise account: its workspaces,
    /// users, groups and claimed email domains. Enterprise plan only.
    pub async fn info(&self) -> Result<EnterpriseInfo> {
        let url = self.ctx.endpoints.enterprise(&self.id);
        let resp = self
            .ctx
            .transport
            .request(Method::GET, &url, None)
            .await
            .map_err(|e| require_enterprise(e, "Enterprise::info()"))?;
        let resp: wire::enterprise::Enterprise = serde_json::from_value(resp)?;
        resp.try_into()
    }
}
