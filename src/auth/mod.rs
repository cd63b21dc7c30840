use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::{Error, Result};

/// Admin session token issued by the login endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
    pub phone: String,
    pub issued_at: DateTime<Utc>,
}

impl AuthToken {
    pub fn new(token: String, phone: &str) -> Self {
        Self {
            token,
            phone: phone.to_string(),
            issued_at: Utc::now(),
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json_data = serde_json::to_string(self)?;

        // Obfuscation only, the backend remains the authority on the token.
        let obfuscated = Self::apply_key(json_data.as_bytes());
        let encoded = general_purpose::STANDARD.encode(&obfuscated);
        fs::write(path, encoded)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path)?;
        let decoded = general_purpose::STANDARD
            .decode(contents.trim())
            .map_err(|e| Error::Auth(format!("Failed to decode token: {}", e)))?;

        let json_str = String::from_utf8(Self::apply_key(&decoded))
            .map_err(|e| Error::Auth(format!("Invalid token data: {}", e)))?;
        let token: AuthToken = serde_json::from_str(&json_str)
            .map_err(|e| Error::Auth(format!("Failed to parse token: {}", e)))?;

        Ok(Some(token))
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(Config::data_dir()?.join("admin_token"))
    }

    /// Key derived from machine and user identity.
    fn obfuscation_key() -> Vec<u8> {
        let mut hasher = Sha256::new();

        #[cfg(target_os = "linux")]
        {
            if let Ok(machine_id) = fs::read_to_string("/etc/machine-id") {
                hasher.update(machine_id.trim().as_bytes());
            } else if let Ok(machine_id) = fs::read_to_string("/var/lib/dbus/machine-id") {
                hasher.update(machine_id.trim().as_bytes());
            }
        }

        hasher.update(b"saffron-admin-token-v1");

        if let Ok(username) = std::env::var("USER") {
            hasher.update(username.as_bytes());
        }

        hasher.finalize().to_vec()
    }

    /// XOR with the derived key. Symmetric, so it both hides and reveals.
    fn apply_key(data: &[u8]) -> Vec<u8> {
        let key = Self::obfuscation_key();
        data.iter()
            .enumerate()
            .map(|(i, byte)| byte ^ key[i % key.len()])
            .collect()
    }
}

/// Holds the current admin session and gates access to the other screens.
#[derive(Debug, Clone)]
pub struct AuthManager {
    token: Option<AuthToken>,
    path: PathBuf,
}

impl AuthManager {
    pub fn new() -> Result<Self> {
        Self::with_path(AuthToken::default_path()?)
    }

    /// Use a specific token file. An unreadable file is treated as logged out.
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let token = match AuthToken::load_from(&path) {
            Ok(token) => token,
            Err(Error::Io(e)) => return Err(Error::Io(e)),
            Err(e) => {
                log::warn!("Discarding stored token: {}", e);
                None
            }
        };
        Ok(Self { token, path })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn get_token(&self) -> Result<&AuthToken> {
        self.token.as_ref().ok_or(Error::NotAuthenticated)
    }

    /// Store a new session. With `remember` the token survives restarts,
    /// otherwise it lives only as long as this manager.
    pub fn set_token(&mut self, token: AuthToken, remember: bool) -> Result<()> {
        if remember {
            token.save_to(&self.path)?;
        } else if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        log::info!("Signed in as {}", token.phone);
        self.token = Some(token);
        Ok(())
    }

    pub fn logout(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.token = None;
        log::info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_auth_manager_not_authenticated_without_file() {
        let dir = TempDir::new().unwrap();
        let manager = AuthManager::with_path(dir.path().join("admin_token")).unwrap();
        assert!(!manager.is_authenticated());
        assert!(matches!(manager.get_token(), Err(Error::NotAuthenticated)));
    }

    #[test]
    fn test_unreadable_token_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the token file should be cannot be read.
        let result = AuthManager::with_path(dir.path().to_path_buf());
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_token_file_is_not_plaintext() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("admin_token");
        let token = AuthToken::new("jwt-abc.def".to_string(), "9876543210");
        token.save_to(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("jwt-abc.def"));

        let loaded = AuthToken::load_from(&path).unwrap().unwrap();
        assert_eq!(loaded, token);
    }

    #[test]
    fn test_corrupt_token_file_is_discarded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("admin_token");
        fs::write(&path, "not base64 !!").unwrap();
        let manager = AuthManager::with_path(path).unwrap();
        assert!(!manager.is_authenticated());
    }
}
