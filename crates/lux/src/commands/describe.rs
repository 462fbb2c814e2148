//! `lux describe` command implementation.

use clap::Args;
use lux_config::CliSettings;
use lux_toc::{DescriptionSource, PageDescription, collect_leaves, resolve_description};
use serde::Serialize;

use super::{Site, SiteArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the describe command.
#[derive(Args)]
pub(crate) struct DescribeArgs {
    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    site: SiteArgs,
}

/// One navigation page with its resolved description.
#[derive(Serialize)]
struct DescribedPage<'a> {
    title: &'a str,
    path: &'a str,
    #[serde(flatten)]
    description: PageDescription,
}

impl DescribeArgs {
    /// Execute the describe command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or navigation cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let site = self.site.load(CliSettings::default())?;
        let pages = describe_site(&site);

        let report = self.report(&pages)?;
        if !report.is_empty() {
            output.print_line(&report)?;
        }

        let defaulted = pages
            .iter()
            .filter(|page| page.description.source == DescriptionSource::Default)
            .count();
        if defaulted > 0 {
            output.warning(&format!(
                "{defaulted} of {} pages use the default description",
                pages.len()
            ));
        } else {
            output.info(&format!("{} pages described", pages.len()));
        }
        Ok(())
    }

    /// Format the described pages as JSON or one line per page.
    fn report(&self, pages: &[DescribedPage<'_>]) -> Result<String, CliError> {
        if self.json {
            return Ok(serde_json::to_string_pretty(pages)?);
        }
        Ok(pages
            .iter()
            .map(|page| {
                format!(
                    "{}  [{}]  {}",
                    page.path, page.description.source, page.description
                )
            })
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

fn describe_site(site: &Site) -> Vec<DescribedPage<'_>> {
    let docs_dir = &site.config.docs_resolved.source_dir;
    collect_leaves(&site.nav)
        .into_iter()
        .map(|(title, path)| DescribedPage {
            title,
            path,
            description: resolve_description(docs_dir, path, title),
        })
        .collect()
}
