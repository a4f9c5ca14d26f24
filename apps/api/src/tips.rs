//! Bonus videos shown after an analysis: one resume-writing and one
//! interview video, picked at random from configured catalogs.

use std::sync::Arc;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

const OEMBED_URL: &str = "https://www.youtube.com/oembed";
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const LOOKUP_FAILED_TITLE: &str = "Error: Unable to fetch video title";

/// Resolves a video link to its title. `Ok(None)` means the provider answered
/// without one.
#[async_trait]
pub trait TitleLookup: Send + Sync {
    async fn title(&self, link: &str) -> anyhow::Result<Option<String>>;
}

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: Option<String>,
}

/// Title lookup through YouTube's oEmbed endpoint.
#[derive(Clone)]
pub struct OEmbedTitleLookup {
    client: Client,
}

impl OEmbedTitleLookup {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .build()?,
        })
    }
}

#[async_trait]
impl TitleLookup for OEmbedTitleLookup {
    async fn title(&self, link: &str) -> anyhow::Result<Option<String>> {
        let response: OEmbedResponse = self
            .client
            .get(OEMBED_URL)
            .query(&[("url", link), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusVideo {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BonusVideos {
    pub resume_writing: Option<BonusVideo>,
    pub interview: Option<BonusVideo>,
}

pub struct VideoTips {
    resume_writing: Vec<String>,
    interview: Vec<String>,
    lookup: Arc<dyn TitleLookup>,
}

impl VideoTips {
    pub fn new(
        resume_writing: Vec<String>,
        interview: Vec<String>,
        lookup: Arc<dyn TitleLookup>,
    ) -> Self {
        Self {
            resume_writing,
            interview,
            lookup,
        }
    }

    /// Never fails: lookup errors become a placeholder title.
    pub async fn bonus_videos(&self) -> BonusVideos {
        let resume_link = pick(&self.resume_writing);
        let interview_link = pick(&self.interview);

        BonusVideos {
            resume_writing: self.resolve(resume_link).await,
            interview: self.resolve(interview_link).await,
        }
    }

    async fn resolve(&self, link: Option<String>) -> Option<BonusVideo> {
        let url = link?;
        let title = match self.lookup.title(&url).await {
            Ok(Some(title)) => title,
            Ok(None) => UNKNOWN_TITLE.to_string(),
            Err(e) => {
                warn!(url = %url, "Error fetching video info: {e}");
                LOOKUP_FAILED_TITLE.to_string()
            }
        };
        Some(BonusVideo { url, title })
    }
}

fn pick(links: &[String]) -> Option<String> {
    links.choose(&mut rand::thread_rng()).cloned()
}
