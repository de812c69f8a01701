use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::lenient;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub allows_remote: bool,
}

impl Location {
    /// "city, state, country" leaving out whatever is unknown
    pub fn describe(&self) -> String {
        [&self.city, &self.state, &self.country]
            .into_iter()
            .flatten()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Salary {
    #[serde(
        default,
        deserialize_with = "lenient::optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub min: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient::optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<u64>,
    #[serde(default = "default_currency", deserialize_with = "currency")]
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
}

fn default_currency() -> String {
    "USD".to_owned()
}

fn currency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .filter(|currency| !currency.trim().is_empty())
        .unwrap_or_else(default_currency))
}

impl Salary {
    pub fn new(min: Option<u64>, max: Option<u64>, currency: &str) -> Self {
        Self {
            min,
            max,
            currency: currency.to_owned(),
            period: None,
        }
    }

    /// Human readable range, `None` when the posting publishes neither bound
    pub fn describe(&self) -> Option<String> {
        let amount = |value: u64| match self.currency.as_str() {
            "USD" | "" => format!("${}", group_thousands(value)),
            "EUR" => format!("€{}", group_thousands(value)),
            "GBP" => format!("£{}", group_thousands(value)),
            other => format!("{} {}", group_thousands(value), other),
        };
        match (self.min, self.max) {
            (Some(min), Some(max)) => Some(format!("{} - {}", amount(min), amount(max))),
            (Some(min), None) => Some(format!("from {}", amount(min))),
            (None, Some(max)) => Some(format!("up to {}", amount(max))),
            (None, None) => None,
        }
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// The slice of a job posting shown on cards and lists
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JobSummary {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub company_name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: Location,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub job_type: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub work_mode: String,
    #[serde(default, deserialize_with = "lenient::object_or_none")]
    pub salary: Option<Salary>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Skill {
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    pub display_name: Option<String>,
    pub category: Option<String>,
}

impl Skill {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RequiredSkill {
    pub skill: Option<Skill>,
    #[serde(default = "default_true", deserialize_with = "lenient::or_default")]
    pub required: bool,
    pub proficiency_level: Option<u8>,
    pub weight: Option<u32>,
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Employer {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub logo: Option<String>,
}

/// Full posting from `GET /jobs/:id`
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct JobDetail {
    #[serde(flatten)]
    pub summary: JobSummary,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    pub experience_level: Option<String>,
    pub industry: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub responsibilities: Vec<String>,
    /// free-form, shaped by whoever posted the job
    #[serde(default)]
    pub requirements: Value,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub required_skills: Vec<RequiredSkill>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub application_deadline: Option<NaiveDateTime>,
    pub number_of_openings: Option<u32>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub featured: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub urgent: bool,
    #[serde(default, deserialize_with = "lenient::count")]
    pub views: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub applications_count: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_open: bool,
    pub days_since_posted: Option<i64>,
    pub days_until_deadline: Option<i64>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub published_at: Option<NaiveDateTime>,
    pub employer: Option<Employer>,
}

/// One page of `GET /jobs`
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct JobPage {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub jobs: Vec<JobSummary>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub total: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub pages: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub current_page: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_next: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_prev: bool,
}

/// Filters for the job board. Blank filters are left out of the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobQuery {
    pub search: Option<String>,
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
    pub experience_level: Option<String>,
    pub city: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl JobQuery {
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        let filters = [
            ("search", &self.search),
            ("job_type", &self.job_type),
            ("work_mode", &self.work_mode),
            ("experience_level", &self.experience_level),
            ("city", &self.city),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().map(str::trim).filter(|v| !v.is_empty()) {
                params.push((key, value.to_owned()));
            }
        }
        params
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    JobSeeker,
    Employer,
    #[serde(other)]
    Other,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct UserLocation {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserSkill {
    pub skill: Option<Skill>,
    pub proficiency_level: Option<u8>,
    pub years_of_experience: Option<f32>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub last_name: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub location: UserLocation,
    pub profile_completion: Option<u8>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub skills: Vec<UserSkill>,
    #[serde(default, deserialize_with = "lenient::object_or_none")]
    pub job_seeker_profile: Option<JobSeekerProfile>,
    #[serde(default, deserialize_with = "lenient::object_or_none")]
    pub employer_profile: Option<EmployerProfile>,
}

impl User {
    pub fn display_name(&self) -> String {
        match self.full_name.as_deref().map(str::trim) {
            Some(full_name) if !full_name.is_empty() => full_name.to_owned(),
            _ => format!("{} {}", self.first_name, self.last_name)
                .trim()
                .to_owned(),
        }
    }
}

/// Role data of a job seeker. The server replaces the stored profile as a
/// whole, so fields it knows but this client does not are kept in `other`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct JobSeekerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_job_title: Option<String>,
    /// years, feeds the server's match scoring
    #[serde(
        default,
        deserialize_with = "lenient::optional_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient::object_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub expected_salary: Option<Salary>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl JobSeekerProfile {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrites the fields set in `update`, keeps the rest
    pub fn merge(&mut self, update: JobSeekerProfile) {
        if update.current_job_title.is_some() {
            self.current_job_title = update.current_job_title;
        }
        if update.experience.is_some() {
            self.experience = update.experience;
        }
        if let Some(salary) = update.expected_salary {
            let current = self
                .expected_salary
                .get_or_insert_with(|| Salary::new(None, None, "USD"));
            current.min = salary.min.or(current.min);
            current.max = salary.max.or(current.max);
            current.currency = salary.currency;
        }
        self.other.extend(update.other);
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct EmployerProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl EmployerProfile {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub fn merge(&mut self, update: EmployerProfile) {
        let fields = [
            (&mut self.company_name, update.company_name),
            (&mut self.company_size, update.company_size),
            (&mut self.industry, update.industry),
            (&mut self.company_description, update.company_description),
            (&mut self.company_website, update.company_website),
        ];
        for (field, value) in fields {
            if value.is_some() {
                *field = value;
            }
        }
        self.other.extend(update.other);
    }
}

/// Returned by login and registration
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AuthSession {
    pub message: Option<String>,
    pub access_token: String,
    pub user: User,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ProfileResponse {
    pub message: Option<String>,
    pub user: User,
}

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_seeker_profile: Option<JobSeekerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_profile: Option<EmployerProfile>,
}

/// Only the fields that are set get sent, the server keeps the rest
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    /// sent whole, the server does not merge it with the stored one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_seeker_profile: Option<JobSeekerProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employer_profile: Option<EmployerProfile>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
