//! Shared types used across all domain modules.

use serde::{Deserialize, Serialize};

// ─── View ────────────────────────────────────────────────────────────────────

/// Rendering of a resource requested from the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Default,
    Link,
    Private,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Link => "link",
            Self::Private => "private",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── ListQuery ───────────────────────────────────────────────────────────────

/// Query-string parameters accepted by the index endpoints.
///
/// Not every endpoint honours every key; the server ignores the rest.
/// Fields are declared in alphabetical order, which is the order they appear
/// in the encoded query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub licence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn licence(mut self, licence: impl Into<String>) -> Self {
        self.licence = Some(licence.into());
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn manufacturer_id(mut self, id: i64) -> Self {
        self.manufacturer_id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    /// Encoded query string, without the leading `?`.
    pub fn to_query_string(&self) -> Result<String, serde_urlencoded::ser::Error> {
        serde_urlencoded::to_string(self)
    }

    /// Append the encoded query to `path`. An empty query leaves it as is.
    pub fn apply(&self, path: String) -> Result<String, serde_urlencoded::ser::Error> {
        let query = self.to_query_string()?;
        if query.is_empty() {
            Ok(path)
        } else {
            Ok(format!("{}?{}", path, query))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_leaves_path() {
        let path = ListQuery::new().apply("/aircrafts".to_string()).unwrap();
        assert_eq!(path, "/aircrafts");
    }

    #[test]
    fn test_query_keys_sorted_and_encoded() {
        let query = ListQuery::new()
            .view(View::Link)
            .offset(20)
            .name("Twin Otter")
            .limit(10);
        assert_eq!(
            query.to_query_string().unwrap(),
            "limit=10&name=Twin+Otter&offset=20&view=link"
        );
    }

    #[test]
    fn test_user_query() {
        let path = ListQuery::new()
            .country("NO")
            .licence("D")
            .apply("/users".to_string())
            .unwrap();
        assert_eq!(path, "/users?country=NO&licence=D");
    }

    #[test]
    fn test_view_serde() {
        assert_eq!(serde_json::to_string(&View::Private).unwrap(), "\"private\"");
        let back: View = serde_json::from_str("\"link\"").unwrap();
        assert_eq!(back, View::Link);
    }
}
