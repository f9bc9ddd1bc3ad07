//! The caller identity carried by a bearer token.
//!
//! Tokens issued by the login flow nest the identity under a `user` claim
//! (`{ "user": { "id": 42, "role": "student" }, "exp": ... }`), while older
//! tokens carry it at the top level. [`Identity::from_claims`] accepts both and
//! produces one canonical value.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

pub const STUDENT_ROLE: &str = "student";
pub const INSTRUCTOR_ROLE: &str = "instructor";
pub const ADMIN_ROLE: &str = "admin";

/// Primary key of the account the token was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum IdentityId {
    Int(i64),
    Text(String),
}

impl IdentityId {
    /// Returns `None` for ids that cannot identify an account: `0`, `""`,
    /// `null`, booleans, arrays and objects.
    pub fn from_claim(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => match n.as_i64() {
                Some(0) => None,
                Some(i) => Some(IdentityId::Int(i)),
                None => n
                    .as_f64()
                    .filter(|f| *f != 0.0 && f.is_finite())
                    .map(|_| IdentityId::Text(n.to_string())),
            },
            Value::String(s) if !s.is_empty() => Some(IdentityId::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityId::Int(i) => write!(f, "{i}"),
            IdentityId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for IdentityId {
    fn from(value: i64) -> Self {
        IdentityId::Int(value)
    }
}

impl From<&str> for IdentityId {
    fn from(value: &str) -> Self {
        IdentityId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Role {
    Student,
    Instructor,
    Admin,
    /// Any role this service has no special handling for, kept verbatim.
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Student => STUDENT_ROLE,
            Role::Instructor => INSTRUCTOR_ROLE,
            Role::Admin => ADMIN_ROLE,
            Role::Other(s) => s,
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        match value {
            STUDENT_ROLE => Role::Student,
            INSTRUCTOR_ROLE => Role::Instructor,
            ADMIN_ROLE => Role::Admin,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded caller identity, attached to the request once the token checks out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Identity {
    pub id: IdentityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Every other member of the identity object (email, name, ...).
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Identity {
    pub fn new(id: impl Into<IdentityId>, role: Option<Role>) -> Self {
        Self {
            id: id.into(),
            role,
            attributes: Map::new(),
        }
    }

    /// Normalizes a verified claim set into an identity.
    ///
    /// A truthy `user` member takes precedence over the top-level claims.
    /// Returns `None` when the chosen object has no usable `id`.
    pub fn from_claims(claims: &Value) -> Option<Self> {
        let subject = match claims.get("user") {
            Some(user) if is_truthy(user) => user,
            _ => claims,
        };
        let object = subject.as_object()?;

        let id = object.get("id").and_then(IdentityId::from_claim)?;
        let role = object.get("role").and_then(Value::as_str).map(Role::from);
        let attributes = object
            .iter()
            .filter(|(key, _)| key.as_str() != "id" && key.as_str() != "role")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Some(Self {
            id,
            role,
            attributes,
        })
    }

    pub fn is_student(&self) -> bool {
        self.role == Some(Role::Student)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
