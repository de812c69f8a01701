use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use portal_model::CredentialProvider;

const TOKEN_FILE_VAR: &str = "PORTAL_TOKEN_FILE";
const DEFAULT_DIR: &str = ".recruit-portal";
const DEFAULT_FILE: &str = "token";

/// Keeps the bearer token of the last login in a single file
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `PORTAL_TOKEN_FILE`, else `$HOME/.recruit-portal/token`
    pub fn from_env() -> Self {
        let path = std::env::var_os(TOKEN_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                let home = std::env::var_os("HOME")
                    .or_else(|| std::env::var_os("USERPROFILE"))
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("."));
                home.join(DEFAULT_DIR).join(DEFAULT_FILE)
            });
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.trim())?;
        log::debug!("stored token in {}", self.path.display());
        Ok(())
    }

    /// `None` when nobody is logged in
    pub fn load(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                log::error!("failed to read token file {}: {}", self.path.display(), e);
                Err(e)
            }
        }
    }

    pub fn clear(&self) -> io::Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::debug!("removed token file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl CredentialProvider for TokenStore {
    fn token(&self) -> io::Result<Option<String>> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = TokenStore::new(dir.path().join("nested").join("token"));
        assert_eq!(store.load().unwrap(), None);

        store.save("  abc.def.ghi\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("abc.def.ghi"));
        assert_eq!(store.token().unwrap().as_deref(), Some("abc.def.ghi"));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().expect("clearing twice is fine");
    }

    #[test]
    fn test_blank_file_means_no_token() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("token");
        fs::write(&path, "\n  ").unwrap();
        assert_eq!(TokenStore::new(path).load().unwrap(), None);
    }

    #[test]
    fn test_token_read_at_call_time() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("token");
        let provider = TokenStore::new(&path);
        assert_eq!(provider.token().unwrap(), None);
        // another process logging in
        TokenStore::new(&path).save("fresh").unwrap();
        assert_eq!(provider.token().unwrap().as_deref(), Some("fresh"));
    }
}
