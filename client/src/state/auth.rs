//! Signed-in user state.
//!
//! There is no backend session: signing in or up stores the user locally for
//! the lifetime of the page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Which side of the platform a user is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserRole {
    Entrepreneur,
    #[default]
    Investor,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entrepreneur => "entrepreneur",
            Self::Investor => "investor",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Entrepreneur => "Entrepreneur",
            Self::Investor => "Investor",
        }
    }

    /// Parse a form value; anything unrecognised is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "entrepreneur" => Some(Self::Entrepreneur),
            "investor" => Some(Self::Investor),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Authentication state tracking the current user.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }

    /// Only entrepreneurs may start or edit campaigns.
    #[must_use]
    pub fn can_manage_campaigns(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == UserRole::Entrepreneur)
    }
}
