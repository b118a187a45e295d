//! Parsing of the `update-function-configuration` response.
//!
//! The CLI prints the function configuration as JSON on success. Only the
//! fields the publisher reports on are read; everything else is ignored.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::types::{HolidayTable, RegionKey};

/// Subset of the function configuration returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionConfiguration {
    pub function_name: Option<String>,
    pub last_update_status: Option<String>,
    pub environment: Option<EnvironmentResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentResponse {
    #[serde(default)]
    pub variables: BTreeMap<String, String>,
}

impl FunctionConfiguration {
    /// Environment variables now set on the function.
    pub fn variables(&self) -> Option<&BTreeMap<String, String>> {
        self.environment.as_ref().map(|e| &e.variables)
    }
}

/// Parses the CLI's stdout. Returns `None` when it is not a configuration
/// document (empty output, an error page, a different output format).
pub fn parse_update_response(stdout: &str) -> Option<FunctionConfiguration> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

/// Table keys that the returned configuration does not contain.
pub fn missing_keys<'a>(
    table: &'a HolidayTable,
    configuration: &FunctionConfiguration,
) -> Vec<&'a RegionKey> {
    let variables = configuration.variables();
    table
        .keys()
        .filter(|key| variables.is_none_or(|vars| !vars.contains_key(key.as_str())))
        .collect()
}
