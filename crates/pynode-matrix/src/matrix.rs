use serde::Serialize;
use tracing::debug;

use crate::{
    compat::CompatibilityTable,
    error::MatrixResult,
    tags::{ImageTag, TagNaming},
    version::VersionSet,
};

/// One image of the build matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildSpec {
    pub ubuntu: String,
    pub python: String,
    pub node: String,
    pub extra_repository: Option<String>,
    pub primary_tag: ImageTag,
    pub alias_tags: Vec<ImageTag>,
}

impl BuildSpec {
    /// The primary tag followed by every alias.
    pub fn tags(&self) -> impl Iterator<Item = &ImageTag> {
        std::iter::once(&self.primary_tag).chain(self.alias_tags.iter())
    }
}

/// Expands `versions` into the full python x node x ubuntu matrix, ubuntu varying fastest.
///
/// Every ubuntu version is checked against `table` up front, so an unknown release fails the
/// whole matrix instead of producing part of it.
pub fn generate(
    versions: &VersionSet,
    table: &CompatibilityTable,
    naming: &TagNaming,
) -> MatrixResult<Vec<BuildSpec>> {
    versions.validate()?;
    for ubuntu in versions.ubuntu.iter() {
        table.get(ubuntu)?;
    }

    let mut specs = Vec::with_capacity(versions.matrix_size());
    for python in versions.python.iter() {
        for node in versions.node.iter() {
            for ubuntu in versions.ubuntu.iter() {
                let extra_repository = table.extra_repository(ubuntu, python)?.map(String::from);

                let ubuntu_latest = versions.ubuntu.is_latest(ubuntu);
                let node_latest = versions.node.is_latest(node);
                let python_latest = versions.python.is_latest(python);

                let mut alias_tags = Vec::new();
                if ubuntu_latest {
                    alias_tags.push(naming.tag(&format!("{python}-{node}")));
                }
                if node_latest {
                    alias_tags.push(naming.tag(&format!("{python}-{ubuntu}")));
                }
                if ubuntu_latest && node_latest {
                    alias_tags.push(naming.tag(python));
                }
                if ubuntu_latest && node_latest && python_latest {
                    alias_tags.push(naming.tag("latest"));
                }

                let spec = BuildSpec {
                    ubuntu: ubuntu.to_string(),
                    python: python.to_string(),
                    node: node.to_string(),
                    extra_repository,
                    primary_tag: naming.tag(&format!("{python}-{node}-{ubuntu}")),
                    alias_tags,
                };
                debug!(
                    "matrix entry {} with {} aliases",
                    spec.primary_tag,
                    spec.alias_tags.len()
                );
                specs.push(spec);
            }
        }
    }
    Ok(specs)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        compat::{UbuntuCompat, DEADSNAKES_PPA},
        error::MatrixError,
        version::VersionList,
    };

    fn sample_versions() -> VersionSet {
        VersionSet::new(
            VersionList::new(["focal", "jammy"]),
            VersionList::new(["3.9", "3.11"]),
            VersionList::new(["16", "18"]),
        )
    }

    fn find<'a>(specs: &'a [BuildSpec], ubuntu: &str, python: &str, node: &str) -> &'a BuildSpec {
        specs
            .iter()
            .find(|s| s.ubuntu == ubuntu && s.python == python && s.node == node)
            .unwrap()
    }

    fn tag_strings(spec: &BuildSpec) -> Vec<String> {
        spec.tags().map(ToString::to_string).collect()
    }

    #[test]
    fn test_matrix_size_and_unique_tags() {
        let specs = generate(
            &VersionSet::default(),
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap();
        assert_eq!(specs.len(), 5 * 3 * 2);

        let primaries: HashSet<_> = specs.iter().map(|s| s.primary_tag.clone()).collect();
        assert_eq!(primaries.len(), specs.len());
    }

    #[test]
    fn test_ubuntu_varies_fastest() {
        let specs = generate(
            &sample_versions(),
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap();
        let order: Vec<_> = specs
            .iter()
            .map(|s| s.primary_tag.tag.as_str())
            .collect();
        assert_eq!(
            order,
            vec![
                "3.9-16-focal",
                "3.9-16-jammy",
                "3.9-18-focal",
                "3.9-18-jammy",
                "3.11-16-focal",
                "3.11-16-jammy",
                "3.11-18-focal",
                "3.11-18-jammy",
            ]
        );
    }

    #[test]
    fn test_latest_of_everything_gets_every_alias() {
        let specs = generate(
            &sample_versions(),
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap();
        let spec = find(&specs, "jammy", "3.11", "18");
        assert_eq!(spec.extra_repository, None);
        assert_eq!(
            tag_strings(spec),
            vec![
                "py-node:3.11-18-jammy",
                "py-node:3.11-18",
                "py-node:3.11-jammy",
                "py-node:3.11",
                "py-node:latest",
            ]
        );
    }

    #[test]
    fn test_latest_of_nothing_gets_only_primary() {
        let specs = generate(
            &sample_versions(),
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap();
        let spec = find(&specs, "focal", "3.11", "16");
        assert_eq!(spec.extra_repository.as_deref(), Some(DEADSNAKES_PPA));
        assert_eq!(tag_strings(spec), vec!["py-node:3.11-16-focal"]);
    }

    #[test]
    fn test_partial_lastness() {
        let specs = generate(
            &sample_versions(),
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap();

        // node latest only
        let spec = find(&specs, "focal", "3.9", "18");
        assert_eq!(
            tag_strings(spec),
            vec!["py-node:3.9-18-focal", "py-node:3.9-focal"]
        );

        // ubuntu and node latest, python not
        let spec = find(&specs, "jammy", "3.9", "18");
        assert_eq!(
            tag_strings(spec),
            vec![
                "py-node:3.9-18-jammy",
                "py-node:3.9-18",
                "py-node:3.9-jammy",
                "py-node:3.9",
            ]
        );
        assert_eq!(spec.extra_repository.as_deref(), Some(DEADSNAKES_PPA));
    }

    #[test]
    fn test_extra_repository_follows_table() {
        let table = CompatibilityTable::default();
        let specs = generate(&VersionSet::default(), &table, &TagNaming::default()).unwrap();
        for spec in &specs {
            let compat = table.get(&spec.ubuntu).unwrap();
            if compat.supports(&spec.python) {
                assert_eq!(spec.extra_repository, None, "{}", spec.primary_tag);
            } else {
                assert_eq!(
                    spec.extra_repository.as_deref(),
                    Some(compat.fallback_repository.as_str())
                );
            }
        }
    }

    #[test]
    fn test_designated_latest_replaces_list_tail() {
        let versions = VersionSet::new(
            VersionList::new(["jammy", "focal"]).with_latest("jammy"),
            VersionList::new(["3.11"]),
            VersionList::new(["18"]),
        );
        let specs = generate(
            &versions,
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap();
        assert_eq!(find(&specs, "jammy", "3.11", "18").alias_tags.len(), 4);
        assert_eq!(find(&specs, "focal", "3.11", "18").alias_tags.len(), 1);
    }

    #[test]
    fn test_unknown_ubuntu_fails_whole_matrix() {
        let versions = VersionSet::new(
            VersionList::new(["focal", "bionic"]),
            VersionList::new(["3.8"]),
            VersionList::new(["18"]),
        );
        let err = generate(
            &versions,
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap_err();
        assert_eq!(err, MatrixError::UnknownUbuntu("bionic".to_string()));
    }

    #[test]
    fn test_custom_table_and_naming() {
        let table = CompatibilityTable::empty()
            .with_entry("noble", UbuntuCompat::new(["3.12"], "ppa:example/python"));
        let versions = VersionSet::new(
            VersionList::new(["noble"]),
            VersionList::new(["3.12", "3.13"]),
            VersionList::new(["20"]),
        );
        let naming = TagNaming::new("registry.local/py-node", "-dev");
        let specs = generate(&versions, &table, &naming).unwrap();

        let spec = find(&specs, "noble", "3.13", "20");
        assert_eq!(spec.extra_repository.as_deref(), Some("ppa:example/python"));
        assert_eq!(
            spec.alias_tags.last().map(ToString::to_string),
            Some("registry.local/py-node:latest-dev".to_string())
        );
    }
}
