use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Element ids of the page sections, in page order.
pub const SECTION_IDS: [&str; 4] = ["hero", "about", "projects", "contact"];

static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::load("site.json").expect("embedded site content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(String),
    #[error("couldn't parse content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("nav item {label:?} points at unknown section {section:?}")]
    UnknownSection { label: String, section: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Primary,
    Secondary,
    Accent,
}

impl Accent {
    pub fn text_class(&self) -> &'static str {
        match self {
            Accent::Primary => "text-primary",
            Accent::Secondary => "text-secondary",
            Accent::Accent => "text-accent",
        }
    }
}

/// A run of paragraph text, optionally highlighted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub accent: Option<Accent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub accent: Accent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub image: String,
    pub code: String,
    pub live: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    /// Icon font class.
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub section: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub profile_image: String,
    pub about: Vec<Vec<Segment>>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub socials: Vec<SocialLink>,
    pub nav: Vec<NavItem>,
}

impl SiteContent {
    /// The site content compiled into the binary.
    pub fn get() -> &'static SiteContent {
        &SITE_CONTENT
    }

    pub fn load(file: &str) -> Result<Self, ContentError> {
        let asset = ContentAssets::get(file).ok_or_else(|| ContentError::NotFound(file.to_string()))?;
        Self::parse(&asset.data)
    }

    pub fn parse(data: &[u8]) -> Result<Self, ContentError> {
        let content = serde_json::from_slice::<SiteContent>(data)?;
        if let Some(item) = content
            .nav
            .iter()
            .find(|item| !SECTION_IDS.contains(&item.section.as_str()))
        {
            return Err(ContentError::UnknownSection {
                label: item.label.clone(),
                section: item.section.clone(),
            });
        }
        Ok(content)
    }

    /// Nav items without the contact section, for the footer quick links.
    pub fn quick_links(&self) -> impl Iterator<Item = &NavItem> {
        self.nav.iter().filter(|item| item.section != "contact")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::load("site.json").unwrap();
        assert!(!content.name.is_empty());
        assert_eq!(content.projects.len(), 3);
        assert_eq!(content.skills.len(), 6);
        assert_eq!(
            content.nav.iter().map(|n| n.section.as_str()).collect::<Vec<_>>(),
            SECTION_IDS.to_vec()
        );
        assert_eq!(content.quick_links().count(), 3);
        assert_eq!(SiteContent::get(), &content);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SiteContent::load("nope.json"),
            Err(ContentError::NotFound(_))
        ));
    }

    #[test]
    fn test_unknown_nav_section() {
        let content = SiteContent::get();
        let mut value = serde_json::to_value(content).unwrap();
        value["nav"][0]["section"] = serde_json::Value::String("blog".to_string());
        let data = serde_json::to_vec(&value).unwrap();
        assert!(matches!(
            SiteContent::parse(&data),
            Err(ContentError::UnknownSection { section, .. }) if section == "blog"
        ));
    }

    #[test]
    fn test_malformed_content() {
        assert!(matches!(
            SiteContent::parse(b"{\"name\": 3}"),
            Err(ContentError::Parse(_))
        ));
    }
}
