use std::error::Error;

use async_trait::async_trait;

use crate::models::{Match, SkillGap};

/// Hands out the bearer token of the current session.
///
/// Implementations are consulted on every request, so a token written by a
/// login in another process is picked up without rebuilding the client.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> std::io::Result<Option<String>>;
}

/// A fixed token, or none at all
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticToken {
    fn token(&self) -> std::io::Result<Option<String>> {
        Ok(self.0.clone())
    }
}

/// Anything able to produce the two halves of a recommendation set
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    type E: Error + Send + Sync;
    async fn fetch_matches(&self) -> Result<Vec<Match>, Self::E>;
    async fn fetch_skill_gaps(&self) -> Result<Vec<SkillGap>, Self::E>;
}
