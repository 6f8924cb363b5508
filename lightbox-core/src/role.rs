//! User role tiers controlling favorite permissions.
//!
//! The enum offers compile-time safety for permission checks. Roles reach
//! the rules as explicit arguments; nothing in the engine reads them from
//! ambient state.
//!
//! # Examples
//! ```
//! use lightbox_core::Role;
//!
//! assert_eq!(Role::Premium.as_str(), "premium");
//! assert_eq!(Role::from_provider("superuser"), Role::Guest);
//! ```

use thiserror::Error;

/// Closed set of user privilege tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    /// Unauthenticated or unrecognised users. Holds no privileges.
    #[default]
    Guest,
    /// Subscribers allowed to favorite restricted images.
    Premium,
    /// Administrators exempt from the image age rule.
    Admin,
}

impl Role {
    /// Return the role as a lowercase `&str`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Premium => "premium",
            Self::Admin => "admin",
        }
    }

    /// Map a provider-supplied role string onto the closed tier set.
    ///
    /// Matching is exact and case-sensitive. Anything unrecognised maps to
    /// [`Role::Guest`] so an unknown role never gains privileges.
    ///
    /// # Examples
    /// ```
    /// use lightbox_core::Role;
    ///
    /// assert_eq!(Role::from_provider("admin"), Role::Admin);
    /// assert_eq!(Role::from_provider("Admin"), Role::Guest);
    /// ```
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        match raw {
            "premium" => Self::Premium,
            "admin" => Self::Admin,
            _ => Self::Guest,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role '{0}'; expected guest, premium, or admin")]
pub struct ParseRoleError(String);

impl std::str::FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "guest" => Ok(Self::Guest),
            "premium" => Ok(Self::Premium),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseRoleError(s.to_owned())),
        }
    }
}
