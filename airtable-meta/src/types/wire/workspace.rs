use serde::Deserialize;

use super::collaborator::CollaboratorGroup;
use super::require_id;
use crate::types::{CollaboratorInfo, WorkspaceInfo};
use crate::{Error, Result};

/// Response of `GET meta/workspaces/{workspaceId}?include=collaborators`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Workspace {
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) created_time: Option<String>,
    #[serde(default)]
    pub(crate) base_ids: Vec<String>,
    #[serde(default)]
    pub(crate) individual_collaborators: CollaboratorGroup,
    #[serde(default)]
    pub(crate) group_collaborators: CollaboratorGroup,
}

impl TryFrom<Workspace> for WorkspaceInfo {
    type Error = Error;

    fn try_from(v: Workspace) -> Result<Self> {
        require_id(&v.id, "workspace")?;

        let collaborators = v
            .individual_collaborators
            .collaborators
            .into_iter()
            .chain(v.group_collaborators.collaborators)
            .map(CollaboratorInfo::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(WorkspaceInfo {
            id: v.id,
            name: v.name,
            created_time: v.created_time,
            base_ids: v.base_ids,
            collaborators,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_workspace() {
        let content = r#"
{
    "id": "wspmhESAta6clCCwF",
    "name": "my first workspace",
    "createdTime": "2022-02-01T21:25:05.663Z",
    "baseIds": ["appLkNDICXNqxSDhG", "appSW9R5uCNmRmfl6"],
    "individualCollaborators": {
        "workspaceCollaborators": [
            {
                "userId": "usrsOEwC36yk9xdcl",
                "email": "foo@bar.com",
                "permissionLevel": "owner"
            }
        ]
    }
}
        "#;

        let wire: Workspace = serde_json::from_str(content).unwrap();
        let v = WorkspaceInfo::try_from(wire).unwrap();
        assert_eq!(v.id, "wspmhESAta6clCCwF");
        assert_eq!(v.name, "my first workspace");
        assert_eq!(v.base_ids.len(), 2);
        assert_eq!(v.collaborators.len(), 1);
        assert_eq!(v.collaborators[0].permission_level.as_deref(), Some("owner"));
    }

    #[test]
    fn test_parse_workspace_rejects_blank_id() {
        let content = r#"{"id": "", "name": "my first workspace"}"#;
        let wire: Workspace = serde_json::from_str(content).unwrap();
        let err = WorkspaceInfo::try_from(wire).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::SchemaInvalid);
    }
}
