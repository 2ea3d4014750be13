//! Cover, headings, tables and chrome shared by the suite documents.

use crate::config::{Palette, RunContext, SuiteConfig};
use crate::decorators::RunningChrome;
use crate::error::ReportError;
use crate::reports::Report;
use crate::story::Story;
use crate::styles::suite_styles_with;
use crate::tables::{TableTheme, color_cell, styled_table};
use geo_layout::Table;
use geo_render_core::DocumentInfo;
use geo_style::StyleRole;
use geo_types::Color;

/// Default vertical gap between blocks.
pub(super) const GAP: f32 = 12.0;

/// Width of the drawings placed in the suite documents.
pub(super) const DRAWING_WIDTH: f32 = 460.0;

/// "Version 1.0  |  February 2026".
pub(super) fn version_line(config: &SuiteConfig, ctx: &RunContext) -> String {
    format!("Version {}  |  {}", config.version, ctx.month_year())
}

/// A suite document under construction.
pub(super) struct SuiteDoc<'a> {
    pub story: Story,
    pub config: &'a SuiteConfig,
    pub ctx: &'a RunContext,
    title: &'static str,
    subtitle: &'static str,
}

impl<'a> SuiteDoc<'a> {
    /// Starts the document with its cover: the title (one paragraph line per
    /// entry of `title_lines`), the subtitle, an accent rule and the meta lines.
    pub fn new(
        config: &'a SuiteConfig,
        ctx: &'a RunContext,
        title: &'static str,
        title_lines: &[&str],
        subtitle: &'static str,
        meta: &[String],
    ) -> Self {
        let mut story = Story::new(suite_styles_with(&config.palette));
        story
            .spacer(120.0)
            .paragraph(StyleRole::CoverTitle, title_lines.join("<br/>"))
            .spacer(8.0)
            .paragraph(StyleRole::CoverSubtitle, subtitle)
            .rule(2.0, config.palette.accent, 20.0);
        for line in meta {
            story.paragraph(StyleRole::CoverDetail, line.as_str());
        }
        story.spacer(30.0);
        Self {
            story,
            config,
            ctx,
            title,
            subtitle,
        }
    }

    pub fn palette(&self) -> &'a Palette {
        &self.config.palette
    }

    /// A bookmarked section heading over a thin accent rule.
    pub fn section(&mut self, title: &str) -> &mut Story {
        let accent = self.palette().accent;
        self.story
            .bookmark(title, 1)
            .paragraph(StyleRole::SectionHeader, title)
            .rule(1.0, accent, 12.0)
    }

    pub fn subsection(&mut self, title: &str) -> &mut Story {
        self.story.paragraph(StyleRole::SubHeader, title)
    }

    pub fn sub2(&mut self, title: &str) -> &mut Story {
        self.story.paragraph(StyleRole::SubSubHeader, title)
    }

    /// A subheading over a bulleted list.
    pub fn bullet_list(&mut self, title: &str, items: &[&str]) -> &mut Story {
        self.subsection(title);
        for item in items {
            self.story.bullet(item);
        }
        &mut self.story
    }

    /// One body paragraph per entry, for the contents pages.
    pub fn contents(&mut self, entries: &[&str]) {
        self.section("Contents");
        for entry in entries {
            self.story.body(*entry);
        }
        self.story.page_break();
    }

    /// A house table in the roomy theme; `header` defaults to the primary colour.
    pub fn table<R, S>(&self, rows: R, widths: &[f32], header: Option<Color>) -> Result<Table, ReportError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        styled_table(rows, widths.to_vec(), header, TableTheme::ROOMY, self.palette())
    }

    /// A table with the accent header.
    pub fn accent_table<R, S>(&self, rows: R, widths: &[f32]) -> Result<Table, ReportError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table(rows, widths, Some(self.palette().accent))
    }

    /// Tints column 1 of the five score-band rows (best band first).
    pub fn color_bands(&self, table: &mut Table, colors: [Color; 5]) {
        let style = table.style_mut();
        for (i, color) in colors.into_iter().enumerate() {
            color_cell(style, 1, i as i32 + 1, color);
        }
    }

    /// Wraps up the document with the running chrome on every page.
    pub fn finish(self) -> Report {
        let chrome = RunningChrome::new(self.title, &self.config.palette)
            .with_footer(self.ctx.month_year(), "Confidential");
        Report {
            document: self.story.into_document(self.title, self.config.setup),
            info: DocumentInfo {
                title: self.title.to_string(),
                author: None,
                subject: Some(self.subtitle.to_string()),
            },
            first_page: Box::new(chrome.clone()),
            later_pages: Box::new(chrome),
        }
    }
}
