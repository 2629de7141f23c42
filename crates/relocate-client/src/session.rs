//! Client-side login gate
//!
//! The backend has no accounts. Logging in only records a display name
//! locally; nothing is sent to or verified by the server.

use crate::error::{ClientError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, username: &str) -> Result<&str> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ClientError::EmptyUsername);
        }
        tracing::info!("Logged in as {}", username);
        Ok(self.username.insert(username.to_string()))
    }

    pub fn logout(&mut self) {
        if let Some(name) = self.username.take() {
            tracing::info!("Logged out {}", name);
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    pub fn greeting(&self) -> String {
        match &self.username {
            Some(name) => format!("Welcome back, {}", name),
            None => "Please log in".to_string(),
        }
    }
}
