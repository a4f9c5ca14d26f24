use std::sync::Arc;

use crate::admin::auth::AdminAuthenticator;
use crate::analysis::fields::SkillVocabulary;
use crate::archive::ResumeArchive;
use crate::config::Config;
use crate::storage::AnalysisStore;
use crate::tips::VideoTips;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Skill vocabulary compiled once at startup from `Config::skill_vocabulary`.
    pub vocabulary: Arc<SkillVocabulary>,
    /// Postgres in production; in-memory in tests.
    pub store: Arc<dyn AnalysisStore>,
    pub archive: Arc<dyn ResumeArchive>,
    pub videos: Arc<VideoTips>,
    pub admin_auth: Arc<dyn AdminAuthenticator>,
}

#[cfg(test)]
pub mod testing {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use bytes::Bytes;

    use super::AppState;
    use crate::admin::auth::StaticTokenAuthenticator;
    use crate::analysis::fields::SkillVocabulary;
    use crate::archive::ResumeArchive;
    use crate::config::{Config, DEFAULT_SKILL_VOCABULARY};
    use crate::storage::memory::MemoryAnalysisStore;
    use crate::tips::{TitleLookup, VideoTips};

    pub const TEST_ADMIN_TOKEN: &str = "test-admin-token";

    #[derive(Default)]
    pub struct RecordingArchive {
        names: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ResumeArchive for RecordingArchive {
        async fn store(&self, file_name: &str, _bytes: Bytes) -> anyhow::Result<String> {
            self.names.lock().unwrap().push(file_name.to_string());
            Ok(format!("resumes/test/{file_name}"))
        }
    }

    struct NoTitle;

    #[async_trait]
    impl TitleLookup for NoTitle {
        async fn title(&self, _link: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }
    }

    pub struct TestDeps {
        pub store: Arc<MemoryAnalysisStore>,
        pub archive: Arc<RecordingArchive>,
    }

    impl TestDeps {
        pub fn with_store(store: Arc<MemoryAnalysisStore>) -> Self {
            Self {
                store,
                archive: Arc::new(RecordingArchive::default()),
            }
        }

        pub fn archived(&self) -> Vec<String> {
            self.archive.names.lock().unwrap().clone()
        }
    }

    pub fn test_config() -> Config {
        Config {
            database_url: "postgres://localhost/skillmatch_test".to_string(),
            s3_bucket: "resumes".to_string(),
            s3_endpoint: "http://localhost:9000".to_string(),
            aws_access_key_id: "minio".to_string(),
            aws_secret_access_key: "minio123".to_string(),
            admin_token: TEST_ADMIN_TOKEN.to_string(),
            skill_vocabulary: DEFAULT_SKILL_VOCABULARY
                .iter()
                .map(|s| s.to_string())
                .collect(),
            resume_video_urls: vec![],
            interview_video_urls: vec![],
            max_upload_bytes: 1024 * 1024,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    pub fn test_state(deps: &TestDeps) -> AppState {
        let config = test_config();
        AppState {
            vocabulary: Arc::new(SkillVocabulary::new(&config.skill_vocabulary).unwrap()),
            store: deps.store.clone(),
            archive: deps.archive.clone(),
            videos: Arc::new(VideoTips::new(vec![], vec![], Arc::new(NoTitle))),
            admin_auth: Arc::new(StaticTokenAuthenticator::new(config.admin_token.clone())),
            config,
        }
    }
}
