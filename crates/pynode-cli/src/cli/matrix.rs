use clap::{Parser, ValueEnum};
use pynode_common::settings::Settings;
use pynode_matrix::{generate, BuildSpec};

use crate::error::PynodeCliResult;

use super::overrides::MatrixOverrides;

#[derive(Parser, Debug, Clone)]
pub struct MatrixArgs {
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub overrides: MatrixOverrides,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

pub async fn run(args: MatrixArgs, config: &Settings) -> PynodeCliResult<()> {
    let settings = args.overrides.apply(config);
    let specs = generate(
        &settings.versions,
        &settings.compatibility,
        &settings.naming(),
    )?;
    print!("{}", render(&specs, args.format)?);
    Ok(())
}

pub fn render(specs: &[BuildSpec], format: OutputFormat) -> PynodeCliResult<String> {
    let out = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(specs)?),
        OutputFormat::Yaml => serde_yaml::to_string(specs)?,
        OutputFormat::Text => {
            let mut out = String::new();
            for spec in specs {
                out.push_str(&spec.primary_tag.to_string());
                if let Some(ref repo) = spec.extra_repository {
                    out.push_str(&format!(" [{}]", repo));
                }
                for alias in &spec.alias_tags {
                    out.push_str(&format!("\n  -> {}", alias));
                }
                out.push('\n');
            }
            out
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pynode_matrix::{CompatibilityTable, TagNaming, VersionList, VersionSet};

    use super::*;

    fn specs() -> Vec<BuildSpec> {
        let versions = VersionSet::new(
            VersionList::new(["focal", "jammy"]),
            VersionList::new(["3.11"]),
            VersionList::new(["18"]),
        );
        generate(
            &versions,
            &CompatibilityTable::default(),
            &TagNaming::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_render_text() {
        let out = render(&specs(), OutputFormat::Text).unwrap();
        assert_eq!(
            out,
            "py-node:3.11-18-focal [ppa:deadsnakes/ppa]\n  -> py-node:3.11-focal\n\
             py-node:3.11-18-jammy\n  -> py-node:3.11-18\n  -> py-node:3.11-jammy\n  -> py-node:3.11\n  -> py-node:latest\n"
        );
    }

    #[test]
    fn test_render_json() {
        let out = render(&specs(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["extra_repository"], "ppa:deadsnakes/ppa");
        assert_eq!(value[1]["extra_repository"], serde_json::Value::Null);
        assert_eq!(value[1]["primary_tag"], "py-node:3.11-18-jammy");
        assert_eq!(value[1]["alias_tags"][3], "py-node:latest");
    }

    #[test]
    fn test_render_yaml() {
        let out = render(&specs(), OutputFormat::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(value[0]["primary_tag"].as_str(), Some("py-node:3.11-18-focal"));
        assert_eq!(value[1]["ubuntu"].as_str(), Some("jammy"));
    }
}
