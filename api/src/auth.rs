//! Client-simulated authentication.
//!
//! There is no auth protocol yet: "logging in" stores a fixed placeholder
//! token in the local store and the signed-in user is a canned profile. The
//! UI adds the simulated latency.

use serde::Deserialize;
use serde::Serialize;

use crate::store;

/// The opaque token written on login. A real backend would issue this.
pub const PLACEHOLDER_TOKEN: &str = "fake-token-123";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Customer,
    Vendor,
    Admin,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// The canned profile behind the placeholder token.
pub fn demo_user() -> User {
    User {
        id: 1,
        name: "Ahmed Hassan".to_string(),
        email: "ahmed@example.com".to_string(),
        role: Role::Customer,
    }
}

/// Writes the session token. Credentials are not checked anywhere yet.
pub fn begin_session() {
    store::set(store::USER_TOKEN_KEY, PLACEHOLDER_TOKEN);
}

pub fn end_session() {
    store::remove(store::USER_TOKEN_KEY);
}

/// Restores the mock user if a token survives from a previous page load.
pub fn restore_session() -> Option<User> {
    store::get(store::USER_TOKEN_KEY).map(|_| demo_user())
}
