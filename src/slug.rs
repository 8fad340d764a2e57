//! Repository slug parsing.
use std::{fmt::Display, str::FromStr};

use crate::error::{DetectError, Result};

/// `owner/name` identifier of a hosted repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug {
    pub owner: String,
    pub name: String,
}

impl Slug {
    /// Split `slug` on `/` into exactly two non-empty parts.
    pub fn parse(slug: &str) -> Result<Self> {
        match slug.split('/').collect::<Vec<_>>().as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(DetectError::InvalidSlug(slug.to_string())),
        }
    }
}

impl FromStr for Slug {
    type Err = DetectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
