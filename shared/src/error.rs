use serde::{Deserialize, Serialize};

/// 后端错误响应体
///
/// 后端是 FastAPI：业务错误为 `{"detail": "..."}`，
/// 参数校验错误为 `{"detail": [{"loc": [...], "msg": "...", "type": "..."}]}`。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Items(Vec<ValidationItem>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationItem {
    pub msg: String,
}

impl ErrorBody {
    /// 可直接展示给用户的错误文本
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            ErrorDetail::Text(text) if !text.trim().is_empty() => Some(text.clone()),
            ErrorDetail::Text(_) => None,
            ErrorDetail::Items(items) if !items.is_empty() => Some(
                items
                    .iter()
                    .map(|i| i.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            ErrorDetail::Items(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_validation_detail_joined() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"missing"},
                          {"loc":["body","password"],"msg":"too short","type":"value_error"}]}"#,
        )
        .unwrap();
        assert_eq!(body.message().as_deref(), Some("field required; too short"));
    }

    #[test]
    fn test_missing_or_blank_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message(), None);
        let body: ErrorBody = serde_json::from_str(r#"{"detail":""}"#).unwrap();
        assert_eq!(body.message(), None);
    }
}
