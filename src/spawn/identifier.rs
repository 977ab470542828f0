//! Service identifier: `service` or `service/environment`.

use crate::error::SpawnError;
use std::fmt;

/// A service name with an optional environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentifier {
    pub service: String,
    pub environment: Option<String>,
}

impl fmt::Display for ServiceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.environment {
            Some(environment) => write!(f, "{}/{}", self.service, environment),
            None => write!(f, "{}", self.service),
        }
    }
}

/// Parse a raw `service[/environment]` argument.
///
/// Fails with [`SpawnError::InvalidIdentifier`] carrying the raw input when the
/// string splits into more than two parts or either part is empty.
pub fn parse_identifier(raw: &str) -> Result<ServiceIdentifier, SpawnError> {
    let parts: Vec<&str> = raw.split('/').collect();
    match parts.as_slice() {
        [service] if !service.is_empty() => Ok(ServiceIdentifier {
            service: service.to_string(),
            environment: None,
        }),
        [service, environment] if !service.is_empty() && !environment.is_empty() => {
            Ok(ServiceIdentifier {
                service: service.to_string(),
                environment: Some(environment.to_string()),
            })
        }
        _ => Err(SpawnError::InvalidIdentifier(raw.to_string())),
    }
}
