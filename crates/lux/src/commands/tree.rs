//! `lux tree` command implementation.

use clap::Args;
use lux_config::CliSettings;
use lux_toc::{NavNode, count_pages, render_nav_tree};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    /// Print only the number of pages.
    #[arg(long, conflicts_with = "json")]
    count: bool,

    /// Print the navigation tree as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl TreeArgs {
    /// Execute the tree command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or navigation cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load(CliSettings::default())?;

        if !self.count && !self.json && site.nav.is_empty() {
            output.warning("Navigation is empty");
            return Ok(());
        }
        output.print_line(&self.report(&site.nav)?)?;
        Ok(())
    }

    fn report(&self, nav: &[NavNode]) -> Result<String, CliError> {
        if self.count {
            Ok(count_pages(nav).to_string())
        } else if self.json {
            Ok(serde_json::to_string_pretty(nav)?)
        } else {
            Ok(render_nav_tree(nav))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::{parse_args, write_site};
    use pretty_assertions::assert_eq;

    fn report_for(extra: &[&str]) -> String {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = write_site(temp_dir.path());
        let mut argv = vec!["-c", config.as_str()];
        argv.extend_from_slice(extra);
        let args: TreeArgs = parse_args(&argv);
        let site = args.site.load(CliSettings::default()).unwrap();
        args.report(&site.nav).unwrap()
    }

    #[test]
    fn test_tree_report() {
        assert_eq!(
            report_for(&[]),
            "- [Home](index.md)\n\
             - **Devices** (2 pages)\n  \
               - [Dimmers](devices/dimmers.md)\n  \
               - [Missing](devices/missing.md)"
        );
    }

    #[test]
    fn test_count_report() {
        assert_eq!(report_for(&["--count"]), "3");
    }

    #[test]
    fn test_json_report_tags_node_kinds() {
        let json: serde_json::Value = serde_json::from_str(&report_for(&["--json"])).unwrap();

        assert_eq!(json[0], serde_json::json!({"kind": "leaf", "title": "Home", "path": "index.md"}));
        assert_eq!(json[1]["kind"], "section");
        assert_eq!(json[1]["title"], "Devices");
        assert_eq!(json[1]["children"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_count_conflicts_with_json() {
        let matches = TreeArgs::augment_args(clap::Command::new("lux"))
            .try_get_matches_from(["lux", "--count", "--json"]);
        assert!(matches.is_err());
    }
}
