use serde::Deserialize;

use super::require_id;
use crate::types::{BaseCollaborators, CollaboratorInfo, ShareInfo};
use crate::{Error, Result};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Collaborator {
    #[serde(default)]
    pub(crate) user_id: Option<String>,
    #[serde(default)]
    pub(crate) group_id: Option<String>,
    #[serde(default)]
    pub(crate) email: Option<String>,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) permission_level: Option<String>,
    #[serde(default)]
    pub(crate) granted_at: Option<String>,
}

/// Airtable nests collaborator lists one level deep, under a key that
/// differs per owning entity (`baseCollaborators` on bases,
/// `workspaceCollaborators` on workspaces).
#[derive(Clone, Debug, Default, Deserialize)]
pub(crate) struct CollaboratorGroup {
    #[serde(
        default,
        alias = "baseCollaborators",
        alias = "workspaceCollaborators"
    )]
    pub(crate) collaborators: Vec<Collaborator>,
}

/// Response of `GET meta/bases/{baseId}?include=collaborators`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BaseCollaboratorsResponse {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) individual_collaborators: CollaboratorGroup,
    #[serde(default)]
    pub(crate) group_collaborators: CollaboratorGroup,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Share {
    pub(crate) share_id: String,
    pub(crate) state: String,
    #[serde(default, rename = "type")]
    pub(crate) share_type: Option<String>,
    #[serde(default)]
    pub(crate) effective_email_domain_allow_list: Vec<String>,
}

/// Response of `GET meta/bases/{baseId}/shares`.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct SharesResponse {
    pub(crate) shares: Vec<Share>,
}

impl TryFrom<Collaborator> for CollaboratorInfo {
    type Error = Error;

    fn try_from(v: Collaborator) -> Result<Self> {
        let id = v.user_id.or(v.group_id).ok_or_else(|| {
            Error::new(
                crate::ErrorKind::SchemaInvalid,
                "collaborator document carries neither userId nor groupId",
            )
        })?;
        require_id(&id, "collaborator")?;

        Ok(CollaboratorInfo {
            id,
            email: v.email,
            name: v.name,
            permission_level: v.permission_level,
            granted_at: v.granted_at,
        })
    }
}

impl TryFrom<BaseCollaboratorsResponse> for BaseCollaborators {
    type Error = Error;

    fn try_from(v: BaseCollaboratorsResponse) -> Result<Self> {
        require_id(&v.id, "base")?;

        let collaborators = v
            .individual_collaborators
            .collaborators
            .into_iter()
            .chain(v.group_collaborators.collaborators)
            .map(CollaboratorInfo::try_from)
            .collect::<Result<Vec<_>>>()?;

        Ok(BaseCollaborators {
            base_id: v.id,
            name: v.name,
            collaborators,
        })
    }
}

impl TryFrom<Share> for ShareInfo {
    type Error = Error;

    fn try_from(v: Share) -> Result<Self> {
        require_id(&v.share_id, "share")?;

        Ok(ShareInfo {
            share_id: v.share_id,
            state: v.state,
            share_type: v.share_type,
            effective_email_domain_allow_list: v.effective_email_domain_allow_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_collaborators() {
        let content = r#"
{
    "id": "appLkNDICXNqxSDhG",
    "name": "Apartment Hunting",
    "individualCollaborators": {
        "baseCollaborators": [
            {
                "userId": "usrsOEwC36yk9xdcl",
                "email": "foo@bar.com",
                "permissionLevel": "create",
                "grantedByUserId": "usrsOEwC36yk9xdcl",
                "createdTime": "2022-09-06T19:21:11.642Z"
            }
        ]
    },
    "groupCollaborators": {
        "baseCollaborators": [
            {
                "groupId": "ugp1mKGb3KXUyQfOZ",
                "name": "Google Group",
                "permissionLevel": "read"
            }
        ]
    }
}
        "#;

        let wire: BaseCollaboratorsResponse = serde_json::from_str(content).unwrap();
        let v = BaseCollaborators::try_from(wire).unwrap();
        assert_eq!(v.base_id, "appLkNDICXNqxSDhG");
        assert_eq!(v.collaborators.len(), 2);
        assert_eq!(v.collaborators[0].id, "usrsOEwC36yk9xdcl");
        assert_eq!(v.collaborators[0].email.as_deref(), Some("foo@bar.com"));
        assert_eq!(v.collaborators[1].id, "ugp1mKGb3KXUyQfOZ");
        assert_eq!(v.collaborators[1].permission_level.as_deref(), Some("read"));
    }

    #[test]
    fn test_collaborator_without_any_id_is_rejected() {
        let wire = Collaborator {
            user_id: None,
            group_id: None,
            email: Some("foo@bar.com".to_string()),
            name: None,
            permission_level: None,
            granted_at: None,
        };
        let err = CollaboratorInfo::try_from(wire).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::SchemaInvalid);
    }

    #[test]
    fn test_parse_shares() {
        let content = r#"
{
    "shares": [
        {
            "effectiveEmailDomainAllowList": ["foobar.com"],
            "shareId": "shr9SpaGqo3EX7NuK",
            "state": "enabled",
            "type": "view"
        },
        {
            "shareId": "shrcKAuUFLRZbmuTq",
            "state": "disabled",
            "type": "base"
        }
    ]
}
        "#;

        let wire: SharesResponse = serde_json::from_str(content).unwrap();
        let shares = wire
            .shares
            .into_iter()
            .map(ShareInfo::try_from)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].share_id, "shr9SpaGqo3EX7NuK");
        assert_eq!(shares[0].effective_email_domain_allow_list, ["foobar.com"]);
        assert_eq!(shares[1].state, "disabled");
    }
}
