use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
#[serde(rename_all = "camelCase")]
pub(crate) struct View {
    pub(crate) id: String,
    pub(crate) name: String,
    /// View type, e.g. `grid`, `calendar` or `kanban`.
    #[serde(rename = "type")]
    pub(crate) view_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view() {
        let content = r#"
{
    "id": "viwQpsuEDqHNmxRbW",
    "name": "All apartments",
    "type": "grid"
}
        "#;

        let v: View = serde_json::from_str(content).unwrap();
        assert_eq!(
            v,
            View {
                id: "viwQpsuEDqHNmxRbW".to_string(),
                name: "All apartments".to_string(),
                view_type: "grid".to_string(),
            }
        );
    }
}
