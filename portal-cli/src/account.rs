use anyhow::{bail, Context, Result};
use portal_client::Client;
use portal_model::{
    AuthSession, EmployerProfile, JobSeekerProfile, ProfileUpdate, Registration, Role, User,
};
use token_store::TokenStore;

use crate::render;

const NOT_LOGGED_IN: &str = "Request was rejected, log in first with `portal login`";

pub fn password_or_prompt(password: Option<String>) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    println!("Please enter your password:");
    let mut password = String::new();
    std::io::stdin()
        .read_line(&mut password)
        .context("Failed to read password")?;
    let password = password.trim();
    if password.is_empty() {
        bail!("Password must not be empty");
    }
    Ok(password.to_owned())
}

fn remember(store: &TokenStore, session: &AuthSession) -> Result<()> {
    store
        .save(&session.access_token)
        .with_context(|| format!("Failed to store token in {}", store.path().display()))?;
    println!(
        "Logged in as {} ({:?})",
        session.user.display_name(),
        session.user.role
    );
    Ok(())
}

pub async fn login(
    client: &Client,
    store: &TokenStore,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let password = password_or_prompt(password)?;
    let session = client.login(email, &password).await.context("Login failed")?;
    remember(store, &session)
}

pub fn logout(store: &TokenStore) -> Result<()> {
    store.clear().context("Failed to remove stored token")?;
    println!("Logged out");
    Ok(())
}

pub async fn register(client: &Client, store: &TokenStore, registration: &Registration) -> Result<()> {
    let session = client
        .register(registration)
        .await
        .context("Registration failed")?;
    remember(store, &session)
}

pub async fn me(client: &Client) -> Result<()> {
    let user = client.current_user().await.map_err(|e| {
        if e.is_unauthorized() {
            anyhow::Error::new(e).context(NOT_LOGGED_IN)
        } else {
            anyhow::Error::new(e).context("Failed to load profile")
        }
    })?;
    println!("{}", render::user(&user));
    Ok(())
}

/// Keeps only the profile that belongs to `role`, refusing fields of the other one
pub fn role_profiles(
    role: Role,
    seeker: JobSeekerProfile,
    employer: EmployerProfile,
) -> Result<(Option<JobSeekerProfile>, Option<EmployerProfile>)> {
    match role {
        Role::JobSeeker if !employer.is_empty() => {
            bail!("Company fields only apply to employer accounts")
        }
        Role::Employer if !seeker.is_empty() => {
            bail!("Job title, experience and salary only apply to job seeker accounts")
        }
        Role::Other if !(seeker.is_empty() && employer.is_empty()) => {
            bail!("This account has no role profile to update")
        }
        _ => {}
    }
    Ok((
        (!seeker.is_empty()).then_some(seeker),
        (!employer.is_empty()).then_some(employer),
    ))
}

/// The server stores the role profile as sent, so the changed fields are
/// laid over the profile it currently holds.
fn merge_role_profiles(
    user: &User,
    update: &mut ProfileUpdate,
    seeker: JobSeekerProfile,
    employer: EmployerProfile,
) -> Result<()> {
    let (seeker, employer) = role_profiles(user.role, seeker, employer)?;
    update.job_seeker_profile = seeker.map(|changes| {
        let mut profile = user.job_seeker_profile.clone().unwrap_or_default();
        profile.merge(changes);
        profile
    });
    update.employer_profile = employer.map(|changes| {
        let mut profile = user.employer_profile.clone().unwrap_or_default();
        profile.merge(changes);
        profile
    });
    Ok(())
}

pub async fn update_profile(
    client: &Client,
    mut update: ProfileUpdate,
    seeker: JobSeekerProfile,
    employer: EmployerProfile,
) -> Result<()> {
    if !(seeker.is_empty() && employer.is_empty()) {
        let current = client
            .current_user()
            .await
            .context("Failed to load the current profile")?;
        merge_role_profiles(&current, &mut update, seeker, employer)?;
    }
    if update.is_empty() {
        bail!("Nothing to update, pass at least one field");
    }
    let user = client
        .update_profile(&update)
        .await
        .context("Failed to update profile")?;
    println!("Profile updated successfully");
    println!("{}", render::user(&user));
    Ok(())
}
