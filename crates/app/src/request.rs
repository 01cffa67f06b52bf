//! Typed description of an inbound admin request.
//!
//! Adapters fill this in from their own request type so that use-cases can
//! log who asked for what without depending on an HTTP framework.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminRequestContext {
    pub method: String,
    pub path: String,
    pub user_agent: Option<String>,
}

impl fmt::Display for AdminRequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        if let Some(agent) = &self.user_agent {
            write!(f, " ({agent})")?;
        }
        Ok(())
    }
}
