use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One directory entry, as authored in a data file.
///
/// Only `name` is mandatory in the payload; the other fields fall back to
/// empty values so that a sparse profile still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

impl ProfileRecord {
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            bio: String::new(),
            avatar: String::new(),
            portfolio: None,
            skills: Vec::new(),
            social: BTreeMap::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = url.into();
        self
    }

    pub fn with_portfolio(mut self, url: impl Into<String>) -> Self {
        self.portfolio = Some(url.into());
        self
    }

    pub fn with_social(mut self, platform: impl Into<String>, url: impl Into<String>) -> Self {
        self.social.insert(platform.into(), url.into());
        self
    }

    pub fn avatar_url(&self) -> Option<&str> {
        Some(self.avatar.as_str()).filter(|url| !url.trim().is_empty())
    }

    /// The portfolio link, treating an empty string as absent.
    pub fn portfolio_url(&self) -> Option<&str> {
        self.portfolio.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// The field a search targets.
///
/// Anything other than the three known names parses to `Unrecognized`; such a
/// query is valid and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Criterion {
    Name,
    Location,
    Skill,
    Unrecognized(String),
}

impl From<&str> for Criterion {
    fn from(value: &str) -> Self {
        match value {
            "name" => Criterion::Name,
            "location" => Criterion::Location,
            "skill" => Criterion::Skill,
            other => Criterion::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for Criterion {
    fn from(value: String) -> Self {
        Criterion::from(value.as_str())
    }
}

impl From<Criterion> for String {
    fn from(value: Criterion) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::Name => write!(f, "name"),
            Criterion::Location => write!(f, "location"),
            Criterion::Skill => write!(f, "skill"),
            Criterion::Unrecognized(other) => write!(f, "{}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub value: String,
    pub criterion: Criterion,
}

impl SearchQuery {
    pub fn new(value: impl Into<String>, criterion: impl Into<Criterion>) -> Self {
        Self {
            value: value.into(),
            criterion: criterion.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Browse,
    Searching,
}
