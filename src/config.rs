//! Remote Store Configuration
//!
//! Connection settings are baked in at build time; a browser bundle has no
//! process environment to read at runtime.

/// Local development endpoint used when no URL is configured
pub const DEFAULT_STORE_URL: &str = "http://127.0.0.1:54321";
pub const DEFAULT_TABLE: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Project base URL, without trailing slash
    pub url: String,
    /// Anonymous API key, sent as `apikey` and bearer token
    pub api_key: String,
    pub table: String,
}

impl StoreConfig {
    /// Read `TASKCLOCK_STORE_URL`, `TASKCLOCK_STORE_KEY` and `TASKCLOCK_STORE_TABLE`
    /// as they were when the bundle was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TASKCLOCK_STORE_URL"),
            option_env!("TASKCLOCK_STORE_KEY"),
            option_env!("TASKCLOCK_STORE_TABLE"),
        )
    }

    pub fn from_values(url: Option<&str>, api_key: Option<&str>, table: Option<&str>) -> Self {
        let url = non_blank(url).unwrap_or(DEFAULT_STORE_URL).trim_end_matches('/');
        Self {
            url: url.to_string(),
            api_key: non_blank(api_key).unwrap_or_default().to_string(),
            table: non_blank(table).unwrap_or(DEFAULT_TABLE).to_string(),
        }
    }

    /// REST endpoint of the task table
    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url, self.table)
    }

    /// False when no API key was provided; every call will then be rejected
    pub fn is_complete(&self) -> bool {
        !self.api_key.is_empty()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
