//! Read-only snapshots of organizational metadata.
//!
//! Airtable's API offers no way to mutate these through the schema surface,
//! so none of them carry a `save()`. Timestamps are kept as the ISO 8601
//! strings the API returns.

/// A user or group with access to a base or workspace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollaboratorInfo {
    /// User id (`usr...`) or group id (`ugp...`).
    pub id: String,
    /// Email address; absent for group collaborators.
    pub email: Option<String>,
    /// Display name, when the API includes it.
    pub name: Option<String>,
    /// Permission level, e.g. `read`, `edit`, `create`, `owner`.
    pub permission_level: Option<String>,
    /// When access was granted.
    pub granted_at: Option<String>,
}

/// Collaborators on a single base, individual and group entries merged.
#[derive(Clone, Debug)]
pub struct BaseCollaborators {
    /// Id of the base these collaborators belong to.
    pub base_id: String,
    /// Base name, when the API includes it.
    pub name: Option<String>,
    /// All collaborators, individuals first, then groups.
    pub collaborators: Vec<CollaboratorInfo>,
}

/// One share link of a base.
#[derive(Clone, Debug)]
pub struct ShareInfo {
    /// Share id (`shr...`).
    pub share_id: String,
    /// Whether the share is `enabled` or `disabled`.
    pub state: String,
    /// What is shared, e.g. `view` or `base`.
    pub share_type: Option<String>,
    /// Email domains the share is restricted to; empty when unrestricted.
    pub effective_email_domain_allow_list: Vec<String>,
}

/// Basic information, bases and collaborators of a workspace.
#[derive(Clone, Debug)]
pub struct WorkspaceInfo {
    /// Workspace id (`wsp...`).
    pub id: String,
    /// Workspace name.
    pub name: String,
    /// When the workspace was created.
    pub created_time: Option<String>,
    /// Ids of the bases living in this workspace.
    pub base_ids: Vec<String>,
    /// Workspace collaborators, individuals first, then groups.
    pub collaborators: Vec<CollaboratorInfo>,
}

/// Information about an enterprise account.
#[derive(Clone, Debug)]
pub struct EnterpriseInfo {
    /// Enterprise account id (`ent...`).
    pub id: String,
    /// When the account was created.
    pub created_time: Option<String>,
    /// Workspaces owned by the account.
    pub workspace_ids: Vec<String>,
    /// Users managed by the account.
    pub user_ids: Vec<String>,
    /// Groups managed by the account.
    pub group_ids: Vec<String>,
    /// Email domains claimed by the account.
    pub email_domains: Vec<EmailDomain>,
}

/// An email domain claimed by an enterprise account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailDomain {
    /// The domain, e.g. `example.com`.
    pub email_domain: String,
    /// Whether users on this domain must sign in through SSO.
    pub is_sso_required: bool,
}
