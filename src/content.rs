use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, LazyLock};
use thiserror::Error;

use crate::config::{ConfigError, TrackerConfig};

pub const SITE_FILE: &str = "site.json";

pub static GLOBAL_CONTENT_CACHE: LazyLock<DashMap<String, Arc<SiteContent>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(String),
    #[error("Content file is not valid UTF-8: {0}")]
    Encoding(String),
    #[error("Couldn't parse content: {0}")]
    ParseError(String),
    #[error("Invalid tracker configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Owner {
    pub name: String,
    pub title: String,
    pub greeting: String,
    pub tagline: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stat {
    pub key: String,
    pub target: u32,
    pub label: String,
    pub icon: String,
    #[serde(default)]
    pub suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Role {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub kind: String,
    pub status: String,
    pub icon: String,
    pub description: Vec<String>,
    pub technologies: Vec<String>,
}

impl Role {
    pub fn is_current(&self) -> bool {
        self.status == "Current"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub title: String,
    pub kind: String,
    pub status: String,
    pub icon: String,
    #[serde(default)]
    pub link: Option<String>,
    pub description: String,
    pub stats: Vec<ProjectStat>,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteContent {
    pub owner: Owner,
    pub socials: Vec<SocialLink>,
    pub stats: Vec<Stat>,
    pub about: About,
    pub experience: Vec<Role>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub trackers: TrackerConfig,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        let content: SiteContent =
            serde_json::from_str(raw).map_err(|e| ContentError::ParseError(e.to_string()))?;
        content.trackers.validate()?;
        Ok(content)
    }
}

/// Loads an embedded content file, parsing it once per process.
pub fn load(name: &str) -> Result<Arc<SiteContent>, ContentError> {
    let cache = &*GLOBAL_CONTENT_CACHE;
    if let Some(c) = cache.get(name) {
        return Ok(c.value().clone());
    }
    let file = Assets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let raw = std::str::from_utf8(&file.data)
        .map_err(|_| ContentError::Encoding(name.to_string()))?;
    let content = Arc::new(SiteContent::parse(raw)?);
    cache.insert(name.to_string(), Arc::clone(&content));
    Ok(content)
}

pub fn site() -> Result<Arc<SiteContent>, ContentError> {
    load(SITE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::VisibilityPolicy;

    #[test]
    fn test_embedded_site_parses() {
        let site = site().expect("embedded site content should parse");
        assert_eq!(site.owner.greeting, "Hi, I'm ");
        assert_eq!(site.stats.len(), 4);
        assert_eq!(site.skills.len(), 4);
        assert!(site.experience.iter().filter(|r| r.is_current()).count() == 1);
        assert_eq!(site.trackers, TrackerConfig::default());
    }

    #[test]
    fn test_cached_after_first_load() {
        site().unwrap();
        assert!(GLOBAL_CONTENT_CACHE.contains_key(SITE_FILE));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load("nope.json"), Err(ContentError::NotFound(_))));
    }

    #[test]
    fn test_bad_tracker_config_rejected() {
        let mut value: serde_json::Value =
            serde_json::from_slice(&Assets::get(SITE_FILE).unwrap().data).unwrap();
        value["trackers"]["visibility_threshold"] = serde_json::json!(3.0);
        let err = SiteContent::parse(&value.to_string()).unwrap_err();
        assert!(matches!(
            err,
            ContentError::Config(ConfigError::ThresholdOutOfRange(_))
        ));
    }

    #[test]
    fn test_trackers_optional() {
        let mut value: serde_json::Value =
            serde_json::from_slice(&Assets::get(SITE_FILE).unwrap().data).unwrap();
        value.as_object_mut().unwrap().remove("trackers");
        let site = SiteContent::parse(&value.to_string()).unwrap();
        assert_eq!(site.trackers.visibility_policy, VisibilityPolicy::Toggle);
    }
}
