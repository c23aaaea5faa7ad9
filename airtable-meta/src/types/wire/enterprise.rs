use serde::Deserialize;

use super::require_id;
use crate::types::{EmailDomain, EnterpriseInfo};
use crate::{Error, Result};

/// Response of `GET meta/enterpriseAccounts/{enterpriseAccountId}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Enterprise {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) created_time: Option<String>,
    #[serde(default)]
    pub(crate) workspace_ids: Vec<String>,
    #[serde(default)]
    pub(crate) user_ids: Vec<String>,
    #[serde(default)]
    pub(crate) group_ids: Vec<String>,
    #[serde(default)]
    pub(crate) email_domains: Vec<WireEmailDomain>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireEmailDomain {
    pub(crate) email_domain: String,
    #[serde(default)]
    pub(crate) is_sso_required: bool,
}

impl TryFrom<Enterprise> for EnterpriseInfo {
    type Error = Error;

    fn try_from(v: Enterprise) -> Result<Self> {
        require_id(&v.id, "enterprise account")?;

        Ok(EnterpriseInfo {
            id: v.id,
            created_time: v.created_time,
            workspace_ids: v.workspace_ids,
            user_ids: v.user_ids,
            group_ids: v.group_ids,
            email_domains: v
                .email_domains
                .into_iter()
                .map(|d| EmailDomain {
                    email_domain: d.email_domain,
                    is_sso_required: d.is_sso_required,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_enterprise() {
        let content = r#"
{
    "id": "entUBq2RGdihxl3vU",
    "createdTime": "2021-01-05T21:25:05.663Z",
    "groupIds": ["ugp1mKGb3KXUyQfOZ"],
    "userIds": ["usrL2PNC5o3H4lBEi", "usrsOEwC36yk9xdcl"],
    "workspaceIds": ["wspmhESAta6clCCwF"],
    "emailDomains": [
        { "emailDomain": "foobar.com", "isSsoRequired": true }
    ]
}
        "#;

        let wire: Enterprise = serde_json::from_str(content).unwrap();
        let v = EnterpriseInfo::try_from(wire).unwrap();
        assert_eq!(v.id, "entUBq2RGdihxl3vU");
        assert_eq!(v.user_ids.len(), 2);
        assert_eq!(v.workspace_ids, ["wspmhESAta6clCCwF"]);
        assert_eq!(v.email_domains[0].email_domain, "foobar.com");
        assert!(v.email_domains[0].is_sso_required);
    }
}
