//! Chef Server types

use serde::{Deserialize, Serialize};

// ============ Request bodies ============

#[derive(Debug, Serialize)]
pub struct ClientNameBody<'a> {
    pub clientname: &'a str,
}

/// Asks the server to issue a fresh key pair for an existing client.
#[derive(Debug, Serialize)]
pub struct GenerateKeyBody<'a> {
    pub clientname: &'a str,
    pub private_key: bool,
}

/// `{"error": "..."}` or `{"error": ["...", ...]}`.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: Option<ErrorMessages>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessages {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessages {
    pub fn join(self) -> String {
        match self {
            Self::One(m) => m,
            Self::Many(ms) => ms.join("; "),
        }
    }
}

// ============ Domain ============

/// A Chef Server user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Only sent on create/update; the server never returns it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl User {
    pub fn builder(username: impl Into<String>) -> UserBuilder {
        UserBuilder {
            user: User {
                username: username.into(),
                ..User::default()
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    #[must_use]
    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.user.first_name = Some(v.into());
        self
    }

    #[must_use]
    pub fn middle_name(mut self, v: impl Into<String>) -> Self {
        self.user.middle_name = Some(v.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.user.last_name = Some(v.into());
        self
    }

    #[must_use]
    pub fn display_name(mut self, v: impl Into<String>) -> Self {
        self.user.display_name = Some(v.into());
        self
    }

    #[must_use]
    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.user.email = Some(v.into());
        self
    }

    #[must_use]
    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.user.password = Some(v.into());
        self
    }

    pub fn build(self) -> User {
        self.user
    }
}

/// A Chef Server organization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// `Business` or `Community` on hosted Chef.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_type: Option<String>,
    /// Name of the validator client created with the organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clientname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guid: Option<String>,
}

impl Organization {
    pub fn builder(name: impl Into<String>) -> OrganizationBuilder {
        OrganizationBuilder {
            org: Organization {
                name: name.into(),
                ..Organization::default()
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct OrganizationBuilder {
    org: Organization,
}

impl OrganizationBuilder {
    #[must_use]
    pub fn full_name(mut self, v: impl Into<String>) -> Self {
        self.org.full_name = Some(v.into());
        self
    }

    #[must_use]
    pub fn org_type(mut self, v: impl Into<String>) -> Self {
        self.org.org_type = Some(v.into());
        self
    }

    #[must_use]
    pub fn clientname(mut self, v: impl Into<String>) -> Self {
        self.org.clientname = Some(v.into());
        self
    }

    #[must_use]
    pub fn guid(mut self, v: impl Into<String>) -> Self {
        self.org.guid = Some(v.into());
        self
    }

    pub fn build(self) -> Organization {
        self.org
    }
}
