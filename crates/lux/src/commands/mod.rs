//! CLI command implementations.

mod describe;
mod render;
mod tree;

use std::path::PathBuf;

use clap::Args;
use lux_config::{CliSettings, Config};
use lux_toc::{NavNode, count_pages, load_navigation};

use crate::error::CliError;

pub(crate) use describe::DescribeArgs;
pub(crate) use render::RenderArgs;
pub(crate) use tree::TreeArgs;

/// Site location arguments shared by all commands.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover lux.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Markdown source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// YAML file holding the `nav` tree (overrides config).
    #[arg(short, long)]
    nav_file: Option<PathBuf>,
}

/// Configuration and navigation loaded for one command run.
pub(crate) struct Site {
    pub config: Config,
    pub nav: Vec<NavNode>,
}

impl SiteArgs {
    /// Load configuration and the navigation tree.
    ///
    /// `settings` carries command-specific overrides; the site location
    /// flags are filled in here.
    pub(crate) fn load(&self, settings: CliSettings) -> Result<Site, CliError> {
        let settings = CliSettings {
            source_dir: self.source_dir.clone(),
            nav_file: self.nav_file.clone(),
            ..settings
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let nav = load_navigation(&config.docs_resolved.nav_file)?;

        tracing::info!(
            nav_file = %config.docs_resolved.nav_file.display(),
            source_dir = %config.docs_resolved.source_dir.display(),
            pages = count_pages(&nav),
            "Site loaded"
        );

        Ok(Site { config, nav })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::path::Path;

    use clap::{Args, Command, FromArgMatches};

    /// Parse command arguments as if they followed the subcommand name.
    pub(crate) fn parse_args<T: Args>(args: &[&str]) -> T {
        let matches = T::augment_args(Command::new("lux"))
            .try_get_matches_from(std::iter::once("lux").chain(args.iter().copied()))
            .unwrap();
        T::from_arg_matches(&matches).unwrap()
    }

    /// Write a small site under `root` and return the path of its `lux.toml`.
    pub(crate) fn write_site(root: &Path) -> String {
        let files = [
            ("lux.toml", "[toc]\nenabled = true\n"),
            (
                "mkdocs.yml",
                "site_name: Lux\nnav:\n  - Home: index.md\n  - Devices:\n      - Dimmers: devices/dimmers.md\n      - Missing: devices/missing.md\n",
            ),
            (
                "docs/index.md",
                "---\ndescription: Lighting control overview\n---\n# Lux\n\n<!-- AUTO_TOC -->\n\n{{ doc_count() }} pages\n",
            ),
            (
                "docs/devices/dimmers.md",
                "# Dimmers\n\n<!-- summary: Phase-cut and PWM dimmer wiring -->\n",
            ),
        ];
        for (name, content) in files {
            let path = root.join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        root.join("lux.toml").to_string_lossy().into_owned()
    }

    #[test]
    fn test_site_args_override_config_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = write_site(temp_dir.path());
        let elsewhere = temp_dir.path().join("other.yml");
        fs::write(&elsewhere, "nav:\n  - Only: only.md\n").unwrap();

        let args: super::SiteArgs =
            parse_args(&["-c", &config, "-n", &elsewhere.to_string_lossy()]);
        let site = args.load(lux_config::CliSettings::default()).unwrap();

        assert_eq!(site.config.docs_resolved.nav_file, elsewhere);
        assert_eq!(site.nav, vec![lux_toc::NavNode::leaf("Only", "only.md")]);
    }
}
