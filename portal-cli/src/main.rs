mod account;
mod jobs;
mod recommend;
mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use portal_client::{Client, ClientConfig};
use portal_model::{
    EmployerProfile, JobQuery, JobSeekerProfile, ProfileUpdate, Registration, Role, Salary,
};
use recommender::Tab;
use token_store::TokenStore;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base url of the portal API, overrides PORTAL_API_URL
    #[clap(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and remember the session token
    Login {
        #[clap(long)]
        email: String,
        /// Asked for on stdin when left out
        #[clap(long)]
        password: Option<String>,
    },
    /// Forget the session token
    Logout {},
    Register {
        #[clap(long)]
        email: String,
        #[clap(long)]
        password: Option<String>,
        #[clap(long)]
        first_name: String,
        #[clap(long)]
        last_name: String,
        #[clap(long, value_enum)]
        role: Option<RoleArg>,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        city: Option<String>,
        #[clap(long)]
        state: Option<String>,
        #[clap(long)]
        country: Option<String>,
        #[command(flatten)]
        seeker: SeekerArgs,
        #[command(flatten)]
        employer: EmployerArgs,
    },
    /// Show the logged in user
    Me {},
    /// Update profile fields, only the given ones change
    Profile {
        #[clap(long)]
        first_name: Option<String>,
        #[clap(long)]
        last_name: Option<String>,
        #[clap(long)]
        phone: Option<String>,
        #[clap(long)]
        bio: Option<String>,
        #[clap(long)]
        city: Option<String>,
        #[clap(long)]
        state: Option<String>,
        #[clap(long)]
        country: Option<String>,
        #[clap(long)]
        zip_code: Option<String>,
        #[command(flatten)]
        seeker: SeekerArgs,
        /// Lower bound of the salary you are looking for
        #[clap(long)]
        expected_salary_min: Option<u64>,
        #[clap(long)]
        expected_salary_max: Option<u64>,
        #[command(flatten)]
        employer: EmployerArgs,
        #[clap(long)]
        company_description: Option<String>,
        #[clap(long)]
        company_website: Option<String>,
    },
    /// Browse open jobs
    Jobs {
        #[clap(long)]
        search: Option<String>,
        #[clap(long)]
        job_type: Option<String>,
        #[clap(long)]
        work_mode: Option<String>,
        #[clap(long)]
        experience_level: Option<String>,
        #[clap(long)]
        city: Option<String>,
        #[clap(long, default_value_t = 1)]
        page: u32,
        #[clap(long, default_value_t = 9)]
        per_page: u32,
    },
    /// Show one job
    Job { id: u64 },
    /// Jobs matched to your profile and the skills you are missing
    Recommend {
        #[clap(long, value_enum, default_value_t = TabArg::Matches)]
        tab: TabArg,
    },
}

/// Job seeker profile fields
#[derive(Args, Debug, Default)]
struct SeekerArgs {
    #[clap(long)]
    current_job_title: Option<String>,
    /// Years of experience, used when scoring matches
    #[clap(long)]
    experience: Option<u64>,
}

impl From<SeekerArgs> for JobSeekerProfile {
    fn from(args: SeekerArgs) -> Self {
        Self {
            current_job_title: args.current_job_title,
            experience: args.experience,
            ..Default::default()
        }
    }
}

/// Employer profile fields
#[derive(Args, Debug, Default)]
struct EmployerArgs {
    #[clap(long)]
    company_name: Option<String>,
    #[clap(long)]
    company_size: Option<String>,
    #[clap(long)]
    industry: Option<String>,
}

impl From<EmployerArgs> for EmployerProfile {
    fn from(args: EmployerArgs) -> Self {
        Self {
            company_name: args.company_name,
            company_size: args.company_size,
            industry: args.industry,
            ..Default::default()
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RoleArg {
    Jobseeker,
    Employer,
}

impl From<RoleArg> for Role {
    fn from(role: RoleArg) -> Self {
        match role {
            RoleArg::Jobseeker => Role::JobSeeker,
            RoleArg::Employer => Role::Employer,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum TabArg {
    Matches,
    Skills,
}

impl From<TabArg> for Tab {
    fn from(tab: TabArg) -> Self {
        match tab {
            TabArg::Matches => Tab::Matches,
            TabArg::Skills => Tab::SkillGaps,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();
    let args = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = args.api_url {
        config = config.with_base_url(api_url);
    }
    let store = TokenStore::from_env();
    let client = Client::new(&config, Arc::new(store.clone()))?;
    log::debug!("using portal api at {}", client.base_url());

    match args.command {
        Commands::Login { email, password } => account::login(&client, &store, &email, password).await,
        Commands::Logout {} => account::logout(&store),
        Commands::Register {
            email,
            password,
            first_name,
            last_name,
            role,
            phone,
            city,
            state,
            country,
            seeker,
            employer,
        } => {
            let role = role.map(Role::from);
            let (job_seeker_profile, employer_profile) =
                account::role_profiles(role.unwrap_or_default(), seeker.into(), employer.into())?;
            let registration = Registration {
                email,
                password: account::password_or_prompt(password)?,
                first_name,
                last_name,
                role,
                phone,
                city,
                state,
                country,
                job_seeker_profile,
                employer_profile,
            };
            account::register(&client, &store, &registration).await
        }
        Commands::Me {} => account::me(&client).await,
        Commands::Profile {
            first_name,
            last_name,
            phone,
            bio,
            city,
            state,
            country,
            zip_code,
            seeker,
            expected_salary_min,
            expected_salary_max,
            employer,
            company_description,
            company_website,
        } => {
            let update = ProfileUpdate {
                first_name,
                last_name,
                phone,
                bio,
                city,
                state,
                country,
                zip_code,
                ..Default::default()
            };
            let mut seeker = JobSeekerProfile::from(seeker);
            if expected_salary_min.is_some() || expected_salary_max.is_some() {
                seeker.expected_salary =
                    Some(Salary::new(expected_salary_min, expected_salary_max, "USD"));
            }
            let employer = EmployerProfile {
                company_description,
                company_website,
                ..EmployerProfile::from(employer)
            };
            account::update_profile(&client, update, seeker, employer).await
        }
        Commands::Jobs {
            search,
            job_type,
            work_mode,
            experience_level,
            city,
            page,
            per_page,
        } => {
            let query = JobQuery {
                search,
                job_type,
                work_mode,
                experience_level,
                city,
                page: Some(page),
                per_page: Some(per_page),
            };
            jobs::list(&client, &query).await
        }
        Commands::Job { id } => jobs::show(&client, id).await,
        Commands::Recommend { tab } => recommend::recommend(client, tab.into()).await,
    }
}
