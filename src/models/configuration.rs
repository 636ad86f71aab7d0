pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, serde::Deserialize, serde::Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EdgeConfig {
    pub edge_base_url: String,
    pub edge_username: String,
    pub edge_password: String,
    pub edge_proxy: EdgeProxy,
}

#[derive(Debug, serde::Deserialize, serde::Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct EdgeProxy {
    pub url: String,
    pub username: String,
    pub password: String,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        EdgeConfig {
            edge_base_url: DEFAULT_BASE_URL.to_string(),
            edge_username: String::new(),
            edge_password: String::new(),
            edge_proxy: EdgeProxy::default(),
        }
    }
}

impl EdgeProxy {
    pub fn is_set(&self) -> bool {
        !self.url.is_empty()
    }
}
