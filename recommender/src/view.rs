//! View-ready projection of a recommendation set.

use std::cmp::Reverse;

use portal_model::{Match, RecommendationSet, SkillGap};

use crate::tier::{tier, Tier};

/// How many job titles a skill-gap card names before summarising the rest
const SAMPLE_JOBS: usize = 3;

pub const LOADING_TEXT: &str = "Analyzing your profile and matching jobs...";
pub const REASONS_HEADING: &str = "Why this matches:";

pub const NO_MATCHES: EmptyState = EmptyState {
    title: "No Matches Found",
    text: "Add more skills to your profile to get better job recommendations!",
};

pub const NO_SKILL_GAPS: EmptyState = EmptyState {
    title: "Great Job!",
    text: "Your skills match well with available jobs!",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Matches,
    SkillGaps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchCard {
    pub job_id: u64,
    pub title: String,
    pub company: String,
    pub city: Option<String>,
    pub job_type: String,
    pub work_mode: String,
    pub salary: Option<String>,
    pub score: u8,
    pub tier: Tier,
    /// `None` rather than an empty list, so no reasons section gets drawn
    pub reasons: Option<Vec<String>>,
    pub link: String,
}

impl MatchCard {
    pub fn badge(&self) -> String {
        format!("{}% Match", self.score)
    }
}

impl From<&Match> for MatchCard {
    fn from(m: &Match) -> Self {
        let job = &m.job;
        Self {
            job_id: job.id,
            title: job.title.clone(),
            company: job.company_name.clone(),
            city: job.location.city.clone().filter(|city| !city.trim().is_empty()),
            job_type: job.job_type.clone(),
            work_mode: job.work_mode.clone(),
            salary: job.salary.as_ref().and_then(|salary| salary.describe()),
            score: m.match_score,
            tier: tier(m.match_score),
            reasons: (!m.match_reasons.is_empty()).then(|| m.match_reasons.clone()),
            link: format!("/jobs/{}", job.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillGapCard {
    pub name: String,
    pub count: u32,
    pub required_in: Option<String>,
}

impl SkillGapCard {
    /// Count as reported by the server, whatever the length of the job sample
    pub fn badge(&self) -> String {
        format!("{} jobs", self.count)
    }
}

impl From<&SkillGap> for SkillGapCard {
    fn from(gap: &SkillGap) -> Self {
        let required_in = (!gap.jobs.is_empty()).then(|| {
            let named = gap
                .jobs
                .iter()
                .take(SAMPLE_JOBS)
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            match gap.jobs.len().checked_sub(SAMPLE_JOBS) {
                Some(rest) if rest > 0 => format!("Required in {} and {} more", named, rest),
                _ => format!("Required in {}", named),
            }
        });
        Self {
            name: gap.name.clone(),
            count: gap.count,
            required_in,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabLabel {
    pub tab: Tab,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TabBody {
    Matches(Vec<MatchCard>),
    NoMatches(EmptyState),
    SkillGaps(Vec<SkillGapCard>),
    NoSkillGaps(EmptyState),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    Loading,
    Failed { message: String },
    Ready { tabs: [TabLabel; 2], body: TabBody },
}

/// Most demanded skills first, server order among equal counts
pub fn rank_skill_gaps(gaps: &[SkillGap]) -> Vec<&SkillGap> {
    let mut ranked = gaps.iter().collect::<Vec<_>>();
    ranked.sort_by_key(|gap| Reverse(gap.count));
    ranked
}

pub fn tab_labels(set: &RecommendationSet, active: Tab) -> [TabLabel; 2] {
    [
        TabLabel {
            tab: Tab::Matches,
            label: format!("Job Matches ({})", set.matches.len()),
            active: active == Tab::Matches,
        },
        TabLabel {
            tab: Tab::SkillGaps,
            label: format!("Skill Gaps ({})", set.skill_gaps.len()),
            active: active == Tab::SkillGaps,
        },
    ]
}

/// Body of the active tab. Matches keep the server's order.
pub fn tab_body(set: &RecommendationSet, active: Tab) -> TabBody {
    match active {
        Tab::Matches if set.matches.is_empty() => TabBody::NoMatches(NO_MATCHES),
        Tab::Matches => TabBody::Matches(set.matches.iter().map(MatchCard::from).collect()),
        Tab::SkillGaps if set.skill_gaps.is_empty() => TabBody::NoSkillGaps(NO_SKILL_GAPS),
        Tab::SkillGaps => TabBody::SkillGaps(
            rank_skill_gaps(&set.skill_gaps)
                .into_iter()
                .map(SkillGapCard::from)
                .collect(),
        ),
    }
}
