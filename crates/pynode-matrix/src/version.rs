use std::{collections::HashSet, fmt::Display};

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::{MatrixError, MatrixResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Ubuntu,
    Python,
    Node,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Ubuntu => write!(f, "ubuntu"),
            Dimension::Python => write!(f, "python"),
            Dimension::Node => write!(f, "node"),
        }
    }
}

/// An ordered list of version identifiers with one of them designated as the latest.
///
/// When `latest` is not set the last listed version is the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionList {
    #[serde(deserialize_with = "deserialize_versions")]
    pub versions: Vec<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_latest",
        skip_serializing_if = "Option::is_none"
    )]
    pub latest: Option<String>,
}

/// A version identifier as written in a settings file.
///
/// Strings and integers are accepted; floats are rejected because `3.10` has already
/// become `3.1` by the time it reaches us.
struct VersionIdentifier(String);

impl<'de> Deserialize<'de> for VersionIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct VersionVisitor;

        impl de::Visitor<'_> for VersionVisitor {
            type Value = VersionIdentifier;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("a quoted version identifier")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(VersionIdentifier(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(VersionIdentifier(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(VersionIdentifier(v.to_string()))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(VersionIdentifier(v.to_string()))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Err(E::custom(format!(
                    "version {} was read as a number, quote version identifiers",
                    v
                )))
            }
        }

        deserializer.deserialize_any(VersionVisitor)
    }
}

pub(crate) fn deserialize_versions<'de, D, C>(deserializer: D) -> Result<C, D::Error>
where
    D: Deserializer<'de>,
    C: FromIterator<String>,
{
    Ok(Vec::<VersionIdentifier>::deserialize(deserializer)?
        .into_iter()
        .map(|v| v.0)
        .collect())
}

fn deserialize_latest<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<VersionIdentifier>::deserialize(deserializer)?.map(|v| v.0))
}

impl VersionList {
    pub fn new<I, S>(versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            versions: versions.into_iter().map(Into::into).collect(),
            latest: None,
        }
    }

    pub fn with_latest(mut self, latest: impl Into<String>) -> Self {
        self.latest = Some(latest.into());
        self
    }

    pub fn latest(&self) -> Option<&str> {
        self.latest
            .as_deref()
            .or_else(|| self.versions.last().map(String::as_str))
    }

    pub fn is_latest(&self, version: &str) -> bool {
        self.latest() == Some(version)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.versions.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn validate(&self, dimension: Dimension) -> MatrixResult {
        if self.versions.is_empty() {
            return Err(MatrixError::EmptyVersions(dimension));
        }

        let mut seen = HashSet::new();
        for version in &self.versions {
            if !seen.insert(version.as_str()) {
                return Err(MatrixError::DuplicateVersion(dimension, version.clone()));
            }
        }

        if let Some(ref latest) = self.latest {
            if !seen.contains(latest.as_str()) {
                return Err(MatrixError::UnknownLatest(dimension, latest.clone()));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionSet {
    pub ubuntu: VersionList,
    pub python: VersionList,
    pub node: VersionList,
}

impl Default for VersionSet {
    fn default() -> Self {
        Self {
            ubuntu: VersionList::new(["focal", "jammy"]),
            python: VersionList::new(["3.7", "3.8", "3.9", "3.10", "3.11"]),
            node: VersionList::new(["14", "16", "18"]),
        }
    }
}

impl VersionSet {
    pub fn new(ubuntu: VersionList, python: VersionList, node: VersionList) -> Self {
        Self {
            ubuntu,
            python,
            node,
        }
    }

    pub fn get(&self, dimension: Dimension) -> &VersionList {
        match dimension {
            Dimension::Ubuntu => &self.ubuntu,
            Dimension::Python => &self.python,
            Dimension::Node => &self.node,
        }
    }

    pub fn validate(&self) -> MatrixResult {
        for dimension in [Dimension::Ubuntu, Dimension::Python, Dimension::Node] {
            self.get(dimension).validate(dimension)?;
        }
        Ok(())
    }

    /// Number of images in the full matrix.
    pub fn matrix_size(&self) -> usize {
        self.ubuntu.len() * self.python.len() * self.node.len()
    }
}
