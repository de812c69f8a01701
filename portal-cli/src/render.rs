//! Plain text rendering of the portal pages.

use portal_model::{JobDetail, JobPage, JobSummary, Salary, Skill, User};
use recommender::view::{LOADING_TEXT, REASONS_HEADING};
use recommender::{EmptyState, MatchCard, PageView, SkillGapCard, TabBody, TabLabel};

const HEADER: &str = "AI-Powered Recommendations\nJobs matched to your skills and experience\n";
const SKILLS_HEADER: &str =
    "Skills to Learn\nThese skills are in high demand for jobs similar to your profile\n";

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}

pub fn recommendations(view: &PageView) -> String {
    let mut out = String::from(HEADER);
    match view {
        PageView::Loading => {
            line(&mut out, format!("\n{}", LOADING_TEXT));
        }
        PageView::Failed { message } => {
            line(&mut out, format!("\n! {}", message));
        }
        PageView::Ready { tabs, body } => {
            line(&mut out, format!("\n{}\n", tab_bar(tabs)));
            match body {
                TabBody::Matches(cards) => {
                    for card in cards {
                        out.push_str(&match_card(card));
                        out.push('\n');
                    }
                }
                TabBody::SkillGaps(cards) => {
                    line(&mut out, SKILLS_HEADER);
                    for card in cards {
                        out.push_str(&skill_gap_card(card));
                        out.push('\n');
                    }
                }
                TabBody::NoMatches(empty) => out.push_str(&empty_state(empty)),
                TabBody::NoSkillGaps(empty) => {
                    line(&mut out, SKILLS_HEADER);
                    out.push_str(&empty_state(empty));
                }
            }
        }
    }
    out.trim_end().to_owned()
}

fn tab_bar(tabs: &[TabLabel]) -> String {
    tabs.iter()
        .map(|tab| {
            if tab.active {
                format!("[{}]", tab.label)
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn empty_state(empty: &EmptyState) -> String {
    format!("{}\n{}\n", empty.title, empty.text)
}

pub fn match_card(card: &MatchCard) -> String {
    let mut out = String::new();
    line(&mut out, format!("{} ({})  {}", card.badge(), card.tier.label(), card.title));
    line(&mut out, format!("  {}", card.company));
    let meta = [card.city.as_deref(), Some(card.job_type.as_str()), Some(card.work_mode.as_str())]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    if !meta.is_empty() {
        line(&mut out, format!("  {}", meta.join(" | ")));
    }
    if let Some(salary) = &card.salary {
        line(&mut out, format!("  {}", salary));
    }
    if let Some(reasons) = &card.reasons {
        line(&mut out, format!("  {}", REASONS_HEADING));
        for reason in reasons {
            line(&mut out, format!("    + {}", reason));
        }
    }
    line(&mut out, format!("  View job details: {}", card.link));
    out
}

pub fn skill_gap_card(card: &SkillGapCard) -> String {
    let mut out = String::new();
    line(&mut out, format!("{}  [{}]", card.name, card.badge()));
    if let Some(required_in) = &card.required_in {
        line(&mut out, format!("  {}", required_in));
    }
    out
}

fn job_line(job: &JobSummary) -> String {
    let mut text = format!("#{} {} at {}", job.id, job.title, job.company_name);
    let location = job.location.describe();
    if !location.is_empty() {
        text.push_str(&format!(" ({})", location));
    }
    let meta = [job.job_type.as_str(), job.work_mode.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>();
    if !meta.is_empty() {
        text.push_str(&format!(" - {}", meta.join(", ")));
    }
    if let Some(salary) = job.salary.as_ref().and_then(Salary::describe) {
        text.push_str(&format!(" - {}", salary));
    }
    text
}

pub fn job_page(page: &JobPage) -> String {
    if page.jobs.is_empty() {
        return "No jobs found, try other filters".to_owned();
    }
    let mut out = String::new();
    for job in &page.jobs {
        line(&mut out, job_line(job));
    }
    out.push_str(&format!(
        "\nPage {} of {} ({} jobs)",
        page.current_page.max(1),
        page.pages.max(1),
        page.total
    ));
    out
}

pub fn job_detail(job: &JobDetail) -> String {
    let mut out = String::new();
    line(&mut out, job_line(&job.summary));
    if let Some(level) = &job.experience_level {
        line(&mut out, format!("Experience: {}", level));
    }
    if job.summary.location.allows_remote {
        line(&mut out, "Remote work possible");
    }
    if let Some(days) = job.days_since_posted {
        line(&mut out, format!("Posted {} days ago", days));
    }
    if let Some(deadline) = job.application_deadline {
        line(&mut out, format!("Apply by {}", deadline.format("%Y-%m-%d")));
    }
    if !job.description.trim().is_empty() {
        line(&mut out, format!("\n{}", job.description.trim()));
    }
    let skills = job
        .required_skills
        .iter()
        .filter_map(|required| required.skill.as_ref().map(Skill::label))
        .collect::<Vec<_>>();
    if !skills.is_empty() {
        line(&mut out, format!("\nSkills: {}", skills.join(", ")));
    }
    for (title, items) in [
        ("Responsibilities", &job.responsibilities),
        ("Benefits", &job.benefits),
    ] {
        if !items.is_empty() {
            line(&mut out, format!("\n{}:", title));
            for item in items {
                line(&mut out, format!("  - {}", item));
            }
        }
    }
    out.trim_end().to_owned()
}

pub fn user(user: &User) -> String {
    let mut out = String::new();
    line(&mut out, format!("{} <{}> ({:?})", user.display_name(), user.email, user.role));
    let location = [&user.location.city, &user.location.state, &user.location.country]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>();
    if !location.is_empty() {
        line(&mut out, format!("Location: {}", location.join(", ")));
    }
    if let Some(phone) = &user.phone {
        line(&mut out, format!("Phone: {}", phone));
    }
    if let Some(bio) = user.bio.as_deref().filter(|bio| !bio.trim().is_empty()) {
        line(&mut out, format!("Bio: {}", bio.trim()));
    }
    if let Some(completion) = user.profile_completion {
        line(&mut out, format!("Profile {}% complete", completion));
    }
    let skills = user
        .skills
        .iter()
        .filter_map(|skill| skill.skill.as_ref().map(Skill::label))
        .collect::<Vec<_>>();
    if !skills.is_empty() {
        line(&mut out, format!("Skills: {}", skills.join(", ")));
    }
    if let Some(profile) = &user.job_seeker_profile {
        if let Some(title) = &profile.current_job_title {
            line(&mut out, format!("Current title: {}", title));
        }
        if let Some(years) = profile.experience {
            line(&mut out, format!("Experience: {} years", years));
        }
        if let Some(salary) = profile.expected_salary.as_ref().and_then(Salary::describe) {
            line(&mut out, format!("Expected salary: {}", salary));
        }
    }
    if let Some(profile) = &user.employer_profile {
        let details = [&profile.company_size, &profile.industry]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>();
        match (&profile.company_name, details.is_empty()) {
            (Some(name), true) => line(&mut out, format!("Company: {}", name)),
            (Some(name), false) => {
                line(&mut out, format!("Company: {} ({})", name, details.join(", ")))
            }
            (None, false) => line(&mut out, format!("Company: {}", details.join(", "))),
            (None, true) => {}
        }
        if let Some(website) = &profile.company_website {
            line(&mut out, format!("Website: {}", website));
        }
        if let Some(description) = &profile.company_description {
            line(&mut out, format!("\n{}", description.trim()));
        }
    }
    out.trim_end().to_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    use portal_model::{Match, RecommendationSet, SkillGap};
    use recommender::view::{tab_body, tab_labels};
    use recommender::{Tab, Tier};
    use serde_json::json;

    fn ready(set: &RecommendationSet, tab: Tab) -> PageView {
        PageView::Ready {
            tabs: tab_labels(set, tab),
            body: tab_body(set, tab),
        }
    }

    fn data_scientist(reasons: Vec<String>) -> Match {
        let job = serde_json::from_value(json!({
            "id": 1,
            "title": "Data Scientist",
            "company_name": "Analytics Pro",
            "location": {"city": "Austin"},
            "job_type": "full-time",
            "work_mode": "hybrid",
            "salary": {"min": 120000, "max": 150000, "currency": "USD"}
        }))
        .unwrap();
        Match::new(job, 85, reasons)
    }

    #[test]
    fn test_match_card_lists_reasons_in_order() {
        let m = data_scientist(vec!["Skill: Python".to_owned(), "Skill: SQL".to_owned()]);
        let card = MatchCard::from(&m);
        assert_eq!(card.tier, Tier::High);
        let text = match_card(&card);
        assert!(text.starts_with("85% Match (high)  Data Scientist"));
        assert!(text.contains("Austin | full-time | hybrid"));
        assert!(text.contains("$120,000 - $150,000"));
        let python = text.find("Skill: Python").expect("python reason missing");
        let sql = text.find("Skill: SQL").expect("sql reason missing");
        assert!(python < sql);
        assert!(text.contains("/jobs/1"));
    }

    #[test]
    fn test_match_card_without_reasons() {
        let text = match_card(&MatchCard::from(&data_scientist(vec![])));
        assert!(!text.contains(REASONS_HEADING));
    }

    #[test]
    fn test_recommendation_pages() {
        let set = RecommendationSet::default();
        let matches = recommendations(&ready(&set, Tab::Matches));
        assert!(matches.contains("[Job Matches (0)]"));
        assert!(matches.contains("No Matches Found"));
        let gaps = recommendations(&ready(&set, Tab::SkillGaps));
        assert!(gaps.contains("[Skill Gaps (0)]"));
        assert!(gaps.contains("Great Job!"));

        let set = RecommendationSet::new(
            vec![],
            vec![SkillGap::new(
                "Kubernetes".to_owned(),
                12,
                vec!["DevOps Engineer".to_owned(), "SRE".to_owned()],
            )],
        );
        let gaps = recommendations(&ready(&set, Tab::SkillGaps));
        assert!(gaps.contains("Kubernetes  [12 jobs]"));
        assert!(gaps.contains("Required in DevOps Engineer, SRE"));

        assert!(recommendations(&PageView::Loading).contains(LOADING_TEXT));
        let failed = recommendations(&PageView::Failed {
            message: "Failed to load recommendations".to_owned(),
        });
        assert!(failed.contains("! Failed to load recommendations"));
        assert!(!failed.contains("Job Matches"));
    }

    #[test]
    fn test_user_shows_role_profile() {
        let seeker: User = serde_json::from_value(json!({
            "id": 1,
            "email": "dev@example.com",
            "role": "jobseeker",
            "first_name": "Dev",
            "last_name": "Eloper",
            "job_seeker_profile": {
                "current_job_title": "Analyst",
                "experience": 4,
                "expected_salary": {"min": 90000, "max": 110000, "currency": "USD"}
            }
        }))
        .unwrap();
        let text = user(&seeker);
        assert!(text.starts_with("Dev Eloper <dev@example.com> (JobSeeker)"));
        assert!(text.contains("Current title: Analyst"));
        assert!(text.contains("Experience: 4 years"));
        assert!(text.contains("Expected salary: $90,000 - $110,000"));

        let employer: User = serde_json::from_value(json!({
            "id": 2,
            "role": "employer",
            "full_name": "Jo Roe",
            "employer_profile": {"company_name": "Acme", "company_size": "11-50", "industry": "Logistics"}
        }))
        .unwrap();
        assert!(user(&employer).contains("Company: Acme (11-50, Logistics)"));
    }

    #[test]
    fn test_job_page() {
        let page: JobPage = serde_json::from_value(json!({
            "jobs": [{"id": 4, "title": "SRE", "company_name": "Acme",
                      "location": {"city": "Denver", "country": "USA"}, "job_type": "contract"}],
            "total": 1, "pages": 1, "current_page": 1
        }))
        .unwrap();
        let text = job_page(&page);
        assert!(text.contains("#4 SRE at Acme (Denver, USA) - contract"));
        assert!(text.contains("Page 1 of 1 (1 jobs)"));
        assert_eq!(job_page(&JobPage::default()), "No jobs found, try other filters");
    }
}
