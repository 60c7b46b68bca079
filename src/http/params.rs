use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct PagedQuery {
    pub user_id: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

/// A `user_id` taken from a JSON body. Clients send either `42` or `"42"`;
/// any other non-null value is kept as `Other` and can never name a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdParam {
    Number(i64),
    Text(String),
    Other,
}

impl IdParam {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => Some(number.as_i64().map_or(Self::Other, Self::Number)),
            _ => Some(Self::Other),
        }
    }

    /// `0` and blank strings read as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(id) => *id == 0,
            Self::Text(text) => text.trim().is_empty(),
            Self::Other => false,
        }
    }

    pub fn as_id(&self) -> Option<i64> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(text) => parse_id(text),
            Self::Other => None,
        }
    }
}

/// Body of `POST /api/posts/:post_id/like`. Fields are read one by one so a
/// badly typed field never hides the others.
#[derive(Debug, Default)]
pub struct LikeRequest {
    pub user_id: Option<IdParam>,
}

impl LikeRequest {
    pub fn from_body(body: &Value) -> Self {
        Self {
            user_id: body.get("user_id").and_then(IdParam::from_value),
        }
    }
}

#[derive(Debug, Default)]
pub struct CommentRequest {
    pub user_id: Option<IdParam>,
    pub text: Option<String>,
}

impl CommentRequest {
    pub fn from_body(body: &Value) -> Self {
        let text = match body.get("text") {
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Number(number)) => Some(number.to_string()),
            _ => None,
        };

        Self {
            user_id: body.get("user_id").and_then(IdParam::from_value),
            text,
        }
    }
}

/// Returns the value only if it is present and not blank.
pub fn present(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.trim().is_empty())
}

/// Strict identifier parse. `None` means the value cannot name any row.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
