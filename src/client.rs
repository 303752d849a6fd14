//! Remote access to the user list.
//!
//! [`UserFetcher`] is the seam [`crate::source::UserSource`] depends on;
//! [`HttpUserClient`] is the reqwest implementation used by the binary.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{Instrument, debug, info_span, warn};
use url::Url;

use crate::error::FetchError;
use crate::model::User;

pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";
pub const USER_AGENT: &str = concat!("user-dashboard/", env!("CARGO_PKG_VERSION"));

#[async_trait]
pub trait UserFetcher: Send + Sync {
    /// Retrieve the full user collection in endpoint order.
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;
}

#[derive(Clone, Debug)]
pub struct HttpUserClient {
    client: Client,
    endpoint: Url,
}

impl HttpUserClient {
    /// # Errors
    /// Returns a transport error if the underlying HTTP client cannot be built.
    pub fn new(endpoint: Url, user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserFetcher for HttpUserClient {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        let span = info_span!(
            "users.fetch",
            http.method = "GET",
            url = %self.endpoint
        );
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .instrument(span)
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %self.endpoint, "user endpoint returned failure status");
            return Err(FetchError::Response { status });
        }

        let users: Vec<User> = response.json().await?;
        debug!(count = users.len(), "decoded user list");
        Ok(users)
    }
}
