use std::fmt::Display;

use serde::{Deserialize, Serialize, Serializer};

pub const DEFAULT_TAG_PREFIX: &str = "py-node";

/// A `repository:tag` image reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageTag {
    pub repository: String,
    pub tag: String,
}

impl ImageTag {
    pub fn new(repository: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            tag: tag.into(),
        }
    }
}

impl Display for ImageTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.repository, self.tag)
    }
}

impl Serialize for ImageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// How image tags are named: `{prefix}:{tag}{suffix}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagNaming {
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl Default for TagNaming {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TAG_PREFIX.to_string(),
            suffix: String::new(),
        }
    }
}

impl TagNaming {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    pub fn tag(&self, name: &str) -> ImageTag {
        ImageTag::new(&self.prefix, format!("{}{}", name, self.suffix))
    }
}
