use anyhow::{Context, Result};
use portal_client::Client;
use portal_model::JobQuery;

use crate::render;

pub async fn list(client: &Client, query: &JobQuery) -> Result<()> {
    let page = client.list_jobs(query).await.context("Failed to load jobs")?;
    log::info!("found {} jobs on {} pages", page.total, page.pages);
    println!("{}", render::job_page(&page));
    Ok(())
}

pub async fn show(client: &Client, id: u64) -> Result<()> {
    let job = client
        .job(id)
        .await
        .with_context(|| format!("Failed to load job {}", id))?;
    println!("{}", render::job_detail(&job));
    Ok(())
}
