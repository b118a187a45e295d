//! The provider CLI call, as data.

use crate::config::PublishConfig;

/// `aws lambda update-function-configuration` with a full environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFunctionConfiguration {
    pub function_name: String,
    pub region: String,
    /// `Variables={...}` argument, passed as a single argument.
    pub environment: String,
}

impl UpdateFunctionConfiguration {
    pub fn new(config: &PublishConfig, environment: impl Into<String>) -> Self {
        Self {
            function_name: config.function_name.clone(),
            region: config.region.clone(),
            environment: environment.into(),
        }
    }

    /// Argument vector, without the program name.
    pub fn args(&self) -> Vec<String> {
        vec![
            "lambda".to_string(),
            "update-function-configuration".to_string(),
            "--function-name".to_string(),
            self.function_name.clone(),
            "--environment".to_string(),
            self.environment.clone(),
            "--region".to_string(),
            self.region.clone(),
        ]
    }

    /// Shell-like rendering for display. Arguments with spaces or quotes are
    /// wrapped in single quotes; this is not meant to be pasted into a shell
    /// verbatim.
    pub fn display(&self, program: &str) -> String {
        std::iter::once(program.to_string())
            .chain(self.args().into_iter().map(|arg| {
                if arg.contains([' ', '"', '\\']) {
                    format!("'{}'", arg)
                } else {
                    arg
                }
            }))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
