use portal_model::{JobDetail, JobPage, JobQuery};

use crate::api::Result;
use crate::client::Client;

const JOBS_ENDPOINT: &str = "/jobs";

impl Client {
    pub async fn list_jobs(&self, query: &JobQuery) -> Result<JobPage> {
        let params = query.params();
        log::debug!("listing jobs with params: {:?}", params);
        self.get(JOBS_ENDPOINT, &params).await
    }

    /// `GET /jobs/:id`, where a match card links to
    pub async fn job(&self, id: u64) -> Result<JobDetail> {
        self.get(&format!("{}/{}", JOBS_ENDPOINT, id), &[]).await
    }
}
