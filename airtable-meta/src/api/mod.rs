//! Handles over the Airtable metadata API.
//!
//! [`Api`] is the entry point; it hands out cheap [`Base`], [`Workspace`]
//! and [`Enterprise`] handles which perform the actual requests.

use std::sync::Arc;

use urlencoding::encode;

use crate::error::Result;
use crate::transport::{RestTransport, TransportRef};
use crate::Error;

mod base;
pub use base::*;
mod table;
pub use table::*;
mod workspace;
pub use workspace::*;
mod enterprise;
pub use enterprise::*;

/// Default endpoint of the Airtable REST API.
pub const AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

/// Configuration for [`Api`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    api_key: String,
    endpoint_url: String,
}

impl ApiConfig {
    /// Creates a configuration using the given personal access token or
    /// API key against the default endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint_url: AIRTABLE_API_URL.to_string(),
        }
    }

    /// Overrides the endpoint URL, e.g. to point at a proxy.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = endpoint_url.into();
        self
    }
}

/// Shared state behind every handle and schema object: the transport and
/// the URL builder.
pub(crate) struct ApiContext {
    pub(crate) transport: TransportRef,
    pub(crate) endpoints: Endpoint,
}

/// Reference to [`ApiContext`].
pub(crate) type ContextRef = Arc<ApiContext>;

/// Entry point to the Airtable metadata API.
pub struct Api {
    ctx: ContextRef,
}

impl Api {
    /// Creates an API client over a [`RestTransport`].
    pub fn new(config: ApiConfig) -> Result<Self> {
        log::info!("Creating airtable client against {}", config.endpoint_url);
        let transport = Arc::new(RestTransport::new(config.api_key)?);
        Ok(Self::with_transport_and_url(transport, config.endpoint_url))
    }

    /// Creates an API client over a caller-supplied [`Transport`],
    /// targeting the default endpoint.
    ///
    /// [`Transport`]: crate::transport::Transport
    pub fn with_transport(transport: TransportRef) -> Self {
        Self::with_transport_and_url(transport, AIRTABLE_API_URL)
    }

    fn with_transport_and_url(transport: TransportRef, endpoint_url: impl Into<String>) -> Self {
        Self {
            ctx: Arc::new(ApiContext {
                transport,
                endpoints: Endpoint::new(endpoint_url.into()),
            }),
        }
    }

    /// Lists all bases the token can access, with their names.
    pub async fn bases(&self) -> Result<Vec<Base>> {
        let url = self.ctx.endpoints.bases();
        let resp = self
            .ctx
            .transport
            .request(reqwest::Method::GET, &url, None)
            .await?;
        let resp: crate::types::wire::base::ListBasesResponse = serde_json::from_value(resp)?;

        if resp.offset.is_some() {
            // Record pagination is out of scope; base listings over one
            // page are truncated.
            log::debug!("Ignoring pagination offset in bases listing");
        }

        resp.bases
            .into_iter()
            .map(|b| {
                crate::types::wire::require_id(&b.id, "base")?;
                Ok(Base::with_name(self.ctx.clone(), b.id, b.name))
            })
            .collect()
    }

    /// Returns a handle to the base with the given id. No network call.
    pub fn base(&self, base_id: impl Into<String>) -> Base {
        Base::new(self.ctx.clone(), base_id.into())
    }

    /// Returns a handle to the workspace with the given id. No network
    /// call.
    pub fn workspace(&self, workspace_id: impl Into<String>) -> Workspace {
        Workspace::new(self.ctx.clone(), workspace_id.into())
    }

    /// Returns a handle to the enterprise account with the given id. No
    /// network call.
    pub fn enterprise(&self, enterprise_id: impl Into<String>) -> Enterprise {
        Enterprise::new(self.ctx.clone(), enterprise_id.into())
    }
}

/// Appends the billing-plan hint to errors from enterprise-gated calls.
///
/// Airtable answers 404, not 403, when the plan does not cover an endpoint,
/// so a bare 404 is ambiguous. The hint is message enrichment only: kind,
/// status, context and source pass through untouched, and every non-404
/// error is returned as-is.
pub(crate) fn require_enterprise(err: Error, method: &'static str) -> Error {
    if err.http_status() == Some(404) {
        err.append_message(format!(
            "; {method} requires an enterprise billing plan"
        ))
    } else {
        err
    }
}

/// Builds URLs under the `meta` prefix of the API endpoint.
///
/// Caller-supplied identifiers are percent-encoded; table identifiers may
/// be ids or names, so encoding matters there.
pub(crate) struct Endpoint {
    base: String,
}

impl Endpoint {
    pub(crate) fn new(base: String) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn bases(&self) -> String {
        [self.base.as_str(), "meta", "bases"].join("/")
    }

    pub(crate) fn base(&self, base_id: &str) -> String {
        [self.base.as_str(), "meta", "bases", encode(base_id).as_ref()].join("/")
    }

    pub(crate) fn base_shares(&self, base_id: &str) -> String {
        [self.base(base_id).as_str(), "shares"].join("/")
    }

    pub(crate) fn base_tables(&self, base_id: &str) -> String {
        [self.base(base_id).as_str(), "tables"].join("/")
    }

    pub(crate) fn table(&self, base_id: &str, table_id: &str) -> String {
        [
            self.base_tables(base_id).as_str(),
            encode(table_id).as_ref(),
        ]
        .join("/")
    }

    pub(crate) fn table_fields(&self, base_id: &str, table_id: &str) -> String {
        [self.table(base_id, table_id).as_str(), "fields"].join("/")
    }

    pub(crate) fn field(&self, base_id: &str, table_id: &str, field_id: &str) -> String {
        [
            self.table_fields(base_id, table_id).as_str(),
            encode(field_id).as_ref(),
        ]
        .join("/")
    }

    pub(crate) fn view(&self, base_id: &str, view_id: &str) -> String {
        [
            self.base(base_id).as_str(),
            "views",
            encode(view_id).as_ref(),
        ]
        .join("/")
    }

    pub(crate) fn workspace(&self, workspace_id: &str) -> String {
        [
            self.base.as_str(),
            "meta",
            "workspaces",
            encode(workspace_id).as_ref(),
        ]
        .join("/")
    }

    pub(crate) fn move_base(&self, workspace_id: &str) -> String {
        [self.workspace(workspace_id).as_str(), "moveBase"].join("/")
    }

    pub(crate) fn enterprise(&self, enterprise_id: &str) -> String {
        [
            self.base.as_str(),
            "meta",
            "enterpriseAccounts",
            encode(enterprise_id).as_ref(),
        ]
        .join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_endpoint_join() {
        let e = Endpoint::new("https://api.airtable.com/v0/".to_string());
        assert_eq!(e.bases(), "https://api.airtable.com/v0/meta/bases");
        assert_eq!(
            e.table("appLkNDICXNqxSDhG", "tbltp8DGLhqbUmjK1"),
            "https://api.airtable.com/v0/meta/bases/appLkNDICXNqxSDhG/tables/tbltp8DGLhqbUmjK1"
        );
        assert_eq!(
            e.enterprise("entUBq2RGdihxl3vU"),
            "https://api.airtable.com/v0/meta/enterpriseAccounts/entUBq2RGdihxl3vU"
        );
    }

    #[test]
    fn test_endpoint_encodes_table_names() {
        // Table paths accept names as well as ids.
        let e = Endpoint::new(AIRTABLE_API_URL.to_string());
        assert_eq!(
            e.table("appLkNDICXNqxSDhG", "Apartment Hunting"),
            "https://api.airtable.com/v0/meta/bases/appLkNDICXNqxSDhG/tables/Apartment%20Hunting"
        );
    }

    #[test]
    fn test_require_enterprise_hints_only_404() {
        let err = Error::new(ErrorKind::RequestFailed, "not found").with_status(404);
        let err = require_enterprise(err, "Base::collaborators()");
        assert_eq!(err.http_status(), Some(404));
        assert_eq!(err.kind(), ErrorKind::RequestFailed);
        assert!(err
            .message()
            .ends_with("Base::collaborators() requires an enterprise billing plan"));

        let err = Error::new(ErrorKind::RequestFailed, "forbidden").with_status(403);
        let err = require_enterprise(err, "Base::collaborators()");
        assert_eq!(err.message(), "forbidden");
    }
}
