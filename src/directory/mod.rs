//! Configured portal accounts.
//!
//! The gate does not own user management; it consumes a small directory
//! (YAML file in deployment, built-in fixtures in development) that maps
//! usernames to a role tag and a capability set. Passwords are stored as
//! SHA-256 digests.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password_sha256: String,
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read user directory {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid user directory {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("duplicate username '{0}' in user directory")]
    DuplicateUser(String),
}

/// In-memory account lookup, keyed by username.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    pub fn from_records(
        records: impl IntoIterator<Item = UserRecord>,
    ) -> Result<Self, DirectoryError> {
        let mut users = HashMap::new();
        for record in records {
            let username = record.username.clone();
            if users.insert(username.clone(), record).is_some() {
                return Err(DirectoryError::DuplicateUser(username));
            }
        }
        Ok(Self { users })
    }

    /// Load accounts from a YAML file (a list of records)
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records: Vec<UserRecord> =
            serde_yaml::from_str(&raw).map_err(|source| DirectoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_records(records)
    }

    /// Built-in fixture accounts for local development and tests
    pub fn development() -> Self {
        let fixtures = vec![
            UserRecord {
                id: Uuid::new_v4(),
                username: "admin".to_string(),
                password_sha256: password_digest("admin123"),
                role: "admin".to_string(),
                permissions: vec![
                    "manage.users".to_string(),
                    "manage.roles".to_string(),
                    "manage.payments".to_string(),
                    "manage.courses".to_string(),
                    "create.users".to_string(),
                    "read.payments".to_string(),
                ],
            },
            UserRecord {
                id: Uuid::new_v4(),
                username: "instructor".to_string(),
                password_sha256: password_digest("instructor123"),
                role: "instructor".to_string(),
                permissions: vec![
                    "read.courses".to_string(),
                    "create.sessions".to_string(),
                    "update.sessions".to_string(),
                    "read.students".to_string(),
                ],
            },
            UserRecord {
                id: Uuid::new_v4(),
                username: "student".to_string(),
                password_sha256: password_digest("student123"),
                role: "student".to_string(),
                permissions: vec![
                    "read.courses".to_string(),
                    "read.enrollments".to_string(),
                    "create.enrollments".to_string(),
                ],
            },
        ];

        // Fixture usernames are distinct, so this cannot fail
        Self::from_records(fixtures).expect("fixture accounts are unique")
    }

    /// Verify credentials; `None` on unknown user or digest mismatch.
    /// The caller cannot distinguish the two, on purpose.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<&UserRecord> {
        let record = self.users.get(username)?;
        if record.password_sha256 == password_digest(password) {
            Some(record)
        } else {
            None
        }
    }

    pub fn get(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Hex-encoded SHA-256 digest of a password
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let hash = hasher.finalize();
    format!("{:x}", hash)
}
