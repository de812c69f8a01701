use serde::{Deserialize, Serialize};

use crate::lenient;
use crate::types::JobSummary;

/// A job scored against the profile of the logged in user.
/// `match_reasons` keep the order the server ranked them in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub job: JobSummary,
    #[serde(default, deserialize_with = "lenient::score")]
    pub match_score: u8,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub match_reasons: Vec<String>,
}

impl Match {
    pub fn new(job: JobSummary, match_score: i64, match_reasons: Vec<String>) -> Self {
        Self {
            job,
            match_score: match_score.clamp(0, lenient::MAX_SCORE as i64) as u8,
            match_reasons,
        }
    }
}

/// A skill demanded by postings but missing from the profile.
/// `count` is how many postings asked for it, `jobs` only a sample of them,
/// so the two lengths are unrelated.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SkillGap {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub jobs: Vec<String>,
}

impl SkillGap {
    pub fn new(name: String, count: u32, jobs: Vec<String>) -> Self {
        Self { name, count, jobs }
    }
}

/// Body of `GET /ai/match-jobs`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct MatchesResponse {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub matches: Vec<Match>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub user_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub user_experience: u32,
}

/// Body of `GET /ai/skill-gap`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct SkillGapsResponse {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub skill_gaps: Vec<SkillGap>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub current_skills: Vec<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total_gaps: u32,
}

/// Matches and skill gaps fetched together for one visit of the
/// recommendations page. Never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationSet {
    pub matches: Vec<Match>,
    pub skill_gaps: Vec<SkillGap>,
}

impl RecommendationSet {
    pub fn new(matches: Vec<Match>, skill_gaps: Vec<SkillGap>) -> Self {
        Self {
            matches,
            skill_gaps,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.skill_gaps.is_empty()
    }
}
