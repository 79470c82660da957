//! Simulated user table
//!
//! Five named accounts followed by `user6`, `user7`, ... generated ones.

use serde::Serialize;

/// Default number of generated accounts
pub const DEFAULT_GENERATED_USERS: usize = 10_000;

const NAMED_USERS: [(&str, &str, &str); 5] = [
    ("admin", "admin123", "admin@example.com"),
    ("user1", "pass123", "user1@example.com"),
    ("john.doe", "secret", "john@example.com"),
    ("jane.smith", "password", "jane@example.com"),
    ("bob.wilson", "bobby123", "bob@example.com"),
];

/// A row of the user table
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
}

impl UserRecord {
    /// Caller-side credential check; the gate never sees passwords
    pub fn verify_password(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Build the named accounts plus `generated` synthetic ones
pub fn reference_table(generated: usize) -> Vec<UserRecord> {
    let named = NAMED_USERS
        .iter()
        .enumerate()
        .map(|(i, (username, password, email))| UserRecord {
            id: i as u64 + 1,
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
        });

    let offset = NAMED_USERS.len() as u64 + 1;
    let synthetic = (0..generated as u64).map(|i| {
        let n = i + offset;
        UserRecord {
            id: n,
            username: format!("user{}", n),
            password: format!("pass{}", n),
            email: format!("user{}@example.com", n),
        }
    });

    named.chain(synthetic).collect()
}
