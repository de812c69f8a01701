pub mod api;
mod lenient;
pub mod models;
pub mod types;

pub use api::{CredentialProvider, RecommendationSource, StaticToken};
pub use models::{Match, MatchesResponse, RecommendationSet, SkillGap, SkillGapsResponse};
pub use types::{
    AuthSession, Employer, EmployerProfile, JobDetail, JobPage, JobQuery, JobSeekerProfile, JobSummary, Location, ProfileResponse,
    ProfileUpdate, Registration, RequiredSkill, Role, Salary, Skill, User, UserLocation,
    UserSkill,
};
