use async_trait::async_trait;
use portal_model::{Match, MatchesResponse, RecommendationSource, SkillGap, SkillGapsResponse};

use crate::api::{Error, Result};
use crate::client::Client;

const MATCH_JOBS_ENDPOINT: &str = "/ai/match-jobs";
const SKILL_GAP_ENDPOINT: &str = "/ai/skill-gap";

impl Client {
    /// Full body of the match endpoint, including the skills the server matched on
    pub async fn fetch_match_report(&self) -> Result<MatchesResponse> {
        self.get(MATCH_JOBS_ENDPOINT, &[]).await
    }

    pub async fn fetch_skill_gap_report(&self) -> Result<SkillGapsResponse> {
        self.get(SKILL_GAP_ENDPOINT, &[]).await
    }

    pub async fn matches(&self) -> Result<Vec<Match>> {
        let report = self.fetch_match_report().await?;
        log::info!(
            "received {} matches out of {} scored jobs",
            report.matches.len(),
            report.total
        );
        Ok(report.matches)
    }

    pub async fn skill_gaps(&self) -> Result<Vec<SkillGap>> {
        let report = self.fetch_skill_gap_report().await?;
        log::info!("received {} skill gaps", report.skill_gaps.len());
        Ok(report.skill_gaps)
    }
}

#[async_trait]
impl RecommendationSource for Client {
    type E = Error;

    async fn fetch_matches(&self) -> Result<Vec<Match>> {
        self.matches().await
    }

    async fn fetch_skill_gaps(&self) -> Result<Vec<SkillGap>> {
        self.skill_gaps().await
    }
}
