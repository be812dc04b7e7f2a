use async_trait::async_trait;
use reqwest::multipart::Form;
use tracing::{debug, instrument, warn};

use crate::config::Config;
use crate::error::{PortalError, Result};
use crate::model::ProfilePayload;

/// The remote user-storage service.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Create the user's profile. Returns the JSON body of a 2xx response.
    async fn create_user(&self, token: &str, payload: &ProfilePayload) -> Result<serde_json::Value>;
}

/// HTTP client for the profile endpoint.
///
/// `ProfileClient` wraps a [`reqwest::Client`] and posts profiles as
/// multipart forms with a bearer token.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> hackathon_hub::Result<()> {
/// use hackathon_hub::{Config, ProfileApi, ProfileClient, ProfilePayload};
///
/// let client = ProfileClient::new(&Config::from_env())?;
/// let payload = ProfilePayload {
///     name: "Ada".into(),
///     email: "a@b.com".into(),
///     college: "MIT".into(),
///     interests: "AI".into(),
///     skills: vec![],
/// };
/// let body = client.create_user("token", &payload).await?;
/// println!("{body}");
/// # Ok(())
/// # }
/// ```
pub struct ProfileClient {
    http: reqwest::Client,
    users_url: String,
}

impl ProfileClient {
    /// Create a client whose requests are bounded by `config.request_timeout`.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(PortalError::ClientBuild)?;
        Ok(Self::with_client(http, config))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            http: client,
            users_url: config.users_url(),
        }
    }

    pub fn users_url(&self) -> &str {
        &self.users_url
    }
}

fn multipart_form(payload: &ProfilePayload) -> Result<Form> {
    Ok(Form::new()
        .text("name", payload.name.clone())
        .text("email", payload.email.clone())
        .text("college", payload.college.clone())
        .text("interests", payload.interests.clone())
        .text("skills", payload.skills_json()?))
}

#[async_trait]
impl ProfileApi for ProfileClient {
    #[instrument(skip(self, token, payload), fields(url = %self.users_url, skills = payload.skills.len()))]
    async fn create_user(&self, token: &str, payload: &ProfilePayload) -> Result<serde_json::Value> {
        let url = self.users_url.as_str();
        debug!("posting profile");

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .multipart(multipart_form(payload)?)
            .send()
            .await
            .map_err(|e| PortalError::Http {
                url: url.to_owned(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, body = %body, "profile endpoint rejected submission");
            return Err(PortalError::UnexpectedStatus {
                url: url.to_owned(),
                status,
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| PortalError::ResponseBody {
                url: url.to_owned(),
                source: e,
            })
    }
}
