//! `lux render` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use lux_config::CliSettings;
use lux_toc::{AutoToc, TocSettings, expand_macros};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Markdown page to render.
    file: PathBuf,

    /// Write the rendered page here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Marker replaced by the table of contents (overrides config).
    #[arg(long)]
    marker: Option<String>,

    /// Leave the table-of-contents marker untouched.
    #[arg(long)]
    no_toc: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, navigation, or the page cannot be
    /// loaded, or the result cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let site = self.site.load(CliSettings {
            toc_enabled: self.no_toc.then_some(false),
            toc_marker: self.marker,
            ..CliSettings::default()
        })?;

        let settings = TocSettings {
            enabled: site.config.toc.enabled,
            marker: site.config.toc.marker,
        };
        let toc = AutoToc::new(settings, site.nav, site.config.docs_resolved.source_dir);

        let content = fs::read_to_string(&self.file)?;
        if toc.settings().enabled && !content.contains(&toc.settings().marker) {
            tracing::info!(path = %self.file.display(), "No table-of-contents marker in page");
        }
        let rendered = toc.process(&expand_macros(&content, toc.nav()));

        match self.output {
            Some(path) => {
                fs::write(&path, rendered)?;
                output.success(&format!(
                    "Rendered {} to {}",
                    self.file.display(),
                    path.display()
                ));
            }
            None => output.print(&rendered)?,
        }
        Ok(())
    }
}
