use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, MatrixResult};

pub const DEADSNAKES_PPA: &str = "ppa:deadsnakes/ppa";

/// Python versions an Ubuntu release ships natively, and where to get the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UbuntuCompat {
    #[serde(deserialize_with = "crate::version::deserialize_versions")]
    pub supported_python_versions: BTreeSet<String>,
    pub fallback_repository: String,
}

impl UbuntuCompat {
    pub fn new<I, S>(supported_python_versions: I, fallback_repository: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            supported_python_versions: supported_python_versions
                .into_iter()
                .map(Into::into)
                .collect(),
            fallback_repository: fallback_repository.into(),
        }
    }

    pub fn supports(&self, python: &str) -> bool {
        self.supported_python_versions.contains(python)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibilityTable(BTreeMap<String, UbuntuCompat>);

impl Default for CompatibilityTable {
    fn default() -> Self {
        CompatibilityTable::empty()
            .with_entry("jammy", UbuntuCompat::new(["3.10", "3.11"], DEADSNAKES_PPA))
            .with_entry("focal", UbuntuCompat::new(["3.8", "3.9"], DEADSNAKES_PPA))
    }
}

impl CompatibilityTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn with_entry(mut self, ubuntu: impl Into<String>, compat: UbuntuCompat) -> Self {
        self.0.insert(ubuntu.into(), compat);
        self
    }

    pub fn get(&self, ubuntu: &str) -> MatrixResult<&UbuntuCompat> {
        self.0
            .get(ubuntu)
            .ok_or_else(|| MatrixError::UnknownUbuntu(ubuntu.to_string()))
    }

    /// The repository that has to be added to build `python` on `ubuntu`, if any.
    pub fn extra_repository(&self, ubuntu: &str, python: &str) -> MatrixResult<Option<&str>> {
        let compat = self.get(ubuntu)?;
        if compat.supports(python) {
            Ok(None)
        } else {
            Ok(Some(compat.fallback_repository.as_str()))
        }
    }

    pub fn ubuntu_versions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
