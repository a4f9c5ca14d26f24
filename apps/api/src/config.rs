use anyhow::{Context, Result};

/// Skill keywords recognized when no `SKILL_VOCABULARY` is configured.
pub const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "JavaScript",
    "HTML",
    "CSS",
    "React",
    "Node.js",
    "Machine Learning",
    "Data Analysis",
    "Photoshop",
    "InDesign",
    "WordPress",
    "SQL",
    "Flask",
    "Django",
];

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub s3_bucket: String,
    pub s3_endpoint: String,
    pub aws_access_key_id: String,
    pub aws_secret_access_key: String,
    pub admin_token: String,
    /// Ordered skill vocabulary handed to the field extractor.
    pub skill_vocabulary: Vec<String>,
    pub resume_video_urls: Vec<String>,
    pub interview_video_urls: Vec<String>,
    pub max_upload_bytes: usize,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let skill_vocabulary = match std::env::var("SKILL_VOCABULARY") {
            Ok(raw) => parse_list(&raw),
            Err(_) => DEFAULT_SKILL_VOCABULARY
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            s3_bucket: require_env("S3_BUCKET")?,
            s3_endpoint: require_env("S3_ENDPOINT")?,
            aws_access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            aws_secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
            admin_token: require_env("ADMIN_TOKEN")?,
            skill_vocabulary,
            resume_video_urls: optional_list("RESUME_VIDEO_URLS"),
            interview_video_urls: optional_list("INTERVIEW_VIDEO_URLS"),
            max_upload_bytes: match std::env::var("MAX_UPLOAD_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
            },
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_list(key: &str) -> Vec<String> {
    std::env::var(key)
        .map(|raw| parse_list(&raw))
        .unwrap_or_default()
}

/// Splits a comma-separated value, trimming entries and dropping empty ones.
/// Order is preserved.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_preserves_order() {
        assert_eq!(
            parse_list("SQL, Python ,Node.js"),
            vec!["SQL", "Python", "Node.js"]
        );
    }

    #[test]
    fn test_parse_list_drops_blanks() {
        assert_eq!(parse_list(" , Rust,, "), vec!["Rust"]);
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn test_default_vocabulary_has_fourteen_entries() {
        assert_eq!(DEFAULT_SKILL_VOCABULARY.len(), 14);
        assert_eq!(DEFAULT_SKILL_VOCABULARY[0], "Python");
        assert_eq!(DEFAULT_SKILL_VOCABULARY[13], "Django");
    }
}
