//! LifecycleEventType enum naming the host's user-facing event categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a user-facing lifecycle event.
///
/// Only [`LifecycleEventType::Register`] triggers a notification. Categories
/// this crate has no name for are carried verbatim in `Other`, so a newer
/// host can never make event parsing fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LifecycleEventType {
    Login,
    LoginError,
    Register,
    RegisterError,
    Logout,
    UpdateProfile,
    UpdatePassword,
    VerifyEmail,
    ResetPassword,
    DeleteAccount,
    Other(String),
}

impl LifecycleEventType {
    /// Returns the wire name used by the host platform.
    pub fn as_str(&self) -> &str {
        match self {
            LifecycleEventType::Login => "LOGIN",
            LifecycleEventType::LoginError => "LOGIN_ERROR",
            LifecycleEventType::Register => "REGISTER",
            LifecycleEventType::RegisterError => "REGISTER_ERROR",
            LifecycleEventType::Logout => "LOGOUT",
            LifecycleEventType::UpdateProfile => "UPDATE_PROFILE",
            LifecycleEventType::UpdatePassword => "UPDATE_PASSWORD",
            LifecycleEventType::VerifyEmail => "VERIFY_EMAIL",
            LifecycleEventType::ResetPassword => "RESET_PASSWORD",
            LifecycleEventType::DeleteAccount => "DELETE_ACCOUNT",
            LifecycleEventType::Other(name) => name,
        }
    }

    /// Returns true for the "user registered" category.
    pub fn is_registration(&self) -> bool {
        matches!(self, LifecycleEventType::Register)
    }
}

impl From<String> for LifecycleEventType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "LOGIN" => LifecycleEventType::Login,
            "LOGIN_ERROR" => LifecycleEventType::LoginError,
            "REGISTER" => LifecycleEventType::Register,
            "REGISTER_ERROR" => LifecycleEventType::RegisterError,
            "LOGOUT" => LifecycleEventType::Logout,
            "UPDATE_PROFILE" => LifecycleEventType::UpdateProfile,
            "UPDATE_PASSWORD" => LifecycleEventType::UpdatePassword,
            "VERIFY_EMAIL" => LifecycleEventType::VerifyEmail,
            "RESET_PASSWORD" => LifecycleEventType::ResetPassword,
            "DELETE_ACCOUNT" => LifecycleEventType::DeleteAccount,
            _ => LifecycleEventType::Other(name),
        }
    }
}

impl From<&str> for LifecycleEventType {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<LifecycleEventType> for String {
    fn from(event_type: LifecycleEventType) -> Self {
        match event_type {
            LifecycleEventType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LifecycleEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
