use std::env;

/// Function targeted when nothing else is configured.
pub const DEFAULT_FUNCTION_NAME: &str = "mcp-server-function";
/// Region the function is deployed in.
pub const DEFAULT_REGION: &str = "eu-north-1";
/// Provider CLI executable.
pub const DEFAULT_PROGRAM: &str = "aws";

/// Where and how the holiday environment is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishConfig {
    /// Name of the remote function whose environment is replaced.
    pub function_name: String,
    /// Deployment region of the function.
    pub region: String,
    /// Provider CLI executable, looked up on `PATH`.
    pub program: String,
}

impl PublishConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HOLIDAYS_FUNCTION_NAME` - Target function (default: "mcp-server-function")
    /// - `HOLIDAYS_REGION` - Function region (default: "eu-north-1")
    /// - `HOLIDAYS_AWS_CLI` - Provider CLI executable (default: "aws")
    pub fn from_env() -> Self {
        Self {
            function_name: env::var("HOLIDAYS_FUNCTION_NAME")
                .unwrap_or_else(|_| DEFAULT_FUNCTION_NAME.to_string()),
            region: env::var("HOLIDAYS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            program: env::var("HOLIDAYS_AWS_CLI").unwrap_or_else(|_| DEFAULT_PROGRAM.to_string()),
        }
    }

    /// Returns a display string for the target function.
    pub fn target_display(&self) -> String {
        format!("{} (region: {})", self.function_name, self.region)
    }
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_display() {
        let config = PublishConfig {
            function_name: "holidays-fn".to_string(),
            region: "us-east-1".to_string(),
            program: "aws".to_string(),
        };

        assert_eq!(config.target_display(), "holidays-fn (region: us-east-1)");
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("HOLIDAYS_FUNCTION_NAME");
        env::remove_var("HOLIDAYS_REGION");
        env::remove_var("HOLIDAYS_AWS_CLI");

        let config = PublishConfig::from_env();

        assert_eq!(config.function_name, "mcp-server-function");
        assert_eq!(config.region, "eu-north-1");
        assert_eq!(config.program, "aws");
    }
}
