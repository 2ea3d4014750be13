//! The before/after comparison report: a cover with the two composite scores
//! followed by nine numbered sections.

use super::Report;
use crate::config::{ComparisonConfig, Palette, RunContext};
use crate::decorators::{CoverChrome, RunningChrome};
use crate::error::ReportError;
use crate::scoring::{ScoreCard, ScoreRecord, format_delta, round1, score_label, signed, signed_decimal};
use crate::story::Story;
use crate::styles::comparison_styles_with;
use crate::tables::{
    TableTheme, bold_cell, color_cell, color_delta_cell, color_score_cell, emphasize_row, styled_table,
};
use crate::widgets::{
    Series, SiteLabels, comparison_bars, cover_visual, grouped_bar_chart, mini_gauge, score_scale, timeline,
};
use geo_layout::{CellRange, CellStyleKind, Flowable, Stroke, Table, TableStyle};
use geo_render_core::DocumentInfo;
use geo_style::{BuiltinFont, Margins, StyleRole, TextAlign};
use geo_types::Color;
use log::debug;

const CHART_WIDTH: f32 = 480.0;

/// Builds the full comparison report. Fails when the configured categories
/// do not form a valid score card.
pub fn build(config: &ComparisonConfig, ctx: &RunContext) -> Result<Report, ReportError> {
    let card = config.scorecard()?;
    let palette = &config.palette;
    let mut story = Story::new(comparison_styles_with(palette));

    cover(&mut story, config, &card)?;
    executive_summary(&mut story, config, &card)?;
    what_is_geo(&mut story, palette)?;
    score_card(&mut story, config, &card)?;
    deep_dives(&mut story, config, &card)?;
    changed_vs_stayed(&mut story, config, &card)?;
    business_impact(&mut story, config, &card)?;
    roadmap(&mut story, config, &card)?;
    methodology(&mut story, &card, palette)?;
    appendices(&mut story, config)?;
    debug!("Comparison report has {} blocks", story.elements().len());

    let running_header = format!(
        "{}: {} vs. {}  |  {}",
        config.title, config.before_label, config.after_label, config.client_short
    );
    Ok(Report {
        document: story.into_document(config.title.clone(), config.setup),
        info: DocumentInfo {
            title: config.title.clone(),
            author: Some(config.client.clone()),
            subject: Some(config.subtitle.clone()),
        },
        first_page: Box::new(CoverChrome::new(
            format!("Confidential  |  Prepared for {}", config.client),
            palette,
        )),
        later_pages: Box::new(
            RunningChrome::new(running_header, palette)
                .with_header_right("Confidential")
                .with_footer(format!("Generated {}", ctx.long_date()), config.client.clone())
                .with_font_size(7.0),
        ),
    })
}

fn table<R, S>(rows: R, widths: &[f32], header: Option<Color>, palette: &Palette) -> Result<Table, ReportError>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = S>,
    S: Into<String>,
{
    styled_table(rows, widths.to_vec(), header, TableTheme::COMPACT, palette)
}

fn section_header(story: &mut Story, number: u32, title: &str, palette: &Palette) {
    story
        .bookmark(format!("{number}. {title}"), 1)
        .paragraph(StyleRole::SectionNumber, format!("Section {number}"))
        .paragraph(StyleRole::SectionHeader, title)
        .rule(1.5, palette.accent, 10.0);
}

fn sub_header(story: &mut Story, bookmark: &str, markup: &str) {
    story.bookmark(bookmark, 2).paragraph(StyleRole::SubHeader, markup);
}

fn labels(config: &ComparisonConfig) -> SiteLabels<'_> {
    SiteLabels::new(&config.before_label, &config.after_label)
}

/// Baseline and improved scores as two parallel columns.
fn score_columns(card: &ScoreCard) -> (Vec<i64>, Vec<i64>) {
    card.records()
        .iter()
        .map(|r| (i64::from(r.baseline), i64::from(r.improved)))
        .unzip()
}

fn cover(story: &mut Story, config: &ComparisonConfig, card: &ScoreCard) -> Result<(), ReportError> {
    let palette = &config.palette;
    let (before, after) = (card.baseline_score(), card.improved_score());

    story
        .spacer(50.0)
        .paragraph(StyleRole::CoverTitle, config.title.as_str())
        .spacer(4.0)
        .paragraph(StyleRole::CoverSubtitle, config.subtitle.as_str())
        .rule(2.0, palette.accent, 16.0);

    let details = vec![
        vec!["Client".to_string(), config.client.clone()],
        vec!["Analysis Date".to_string(), config.analysis_date.clone()],
        vec![
            format!("{} Site Score", config.before_label),
            format!("{before}/100 \u{2014} {}", score_label(before as f64)),
        ],
        vec![
            format!("{} Site Score", config.after_label),
            format!("{after}/100 \u{2014} {}", score_label(after as f64)),
        ],
        vec![
            "Net Improvement".to_string(),
            format!("{} points ({}%)", signed(card.delta()), signed(card.percent_improvement())),
        ],
    ];
    let style = TableStyle::new()
        .with(CellRange::col(0), CellStyleKind::Font(BuiltinFont::HelveticaBold))
        .with(CellRange::col(1), CellStyleKind::Font(BuiltinFont::Helvetica))
        .with(CellRange::all(), CellStyleKind::FontSize(10.0))
        .with(CellRange::col(0), CellStyleKind::TextColor(palette.accent))
        .with(CellRange::col(1), CellStyleKind::TextColor(palette.text_primary))
        .with(CellRange::cell(1, -1), CellStyleKind::TextColor(palette.delta))
        .with(CellRange::cell(1, -1), CellStyleKind::Font(BuiltinFont::HelveticaBold))
        .with(CellRange::all(), CellStyleKind::Padding(Margins::symmetric(8.0, 6.0)))
        .with(
            CellRange::new((0, 0), (-1, -2)),
            CellStyleKind::LineBelow(Stroke::new(palette.rule, 0.5)),
        );
    story
        .table(Table::new(details, vec![130.0, 340.0])?.with_style(style))
        .spacer(24.0)
        .drawing(cover_visual(before, after, labels(config), config.setup.usable_width(), palette))
        .spacer(16.0)
        .drawing(score_scale(before, after, labels(config), CHART_WIDTH, palette))
        .page_break();
    Ok(())
}

/// Score change weighted by the category's share; zero renders as a dash.
fn weighted_impact(record: &ScoreRecord) -> String {
    let impact = round1(record.weighted_delta());
    if impact == 0.0 {
        "\u{2014}".to_string()
    } else {
        signed_decimal(impact)
    }
}

fn executive_summary(story: &mut Story, config: &ComparisonConfig, card: &ScoreCard) -> Result<(), ReportError> {
    let palette = &config.palette;
    let (before, after) = (card.baseline_score(), card.improved_score());
    section_header(story, 1, "Executive Summary", palette);

    story
        .body(format!(
            "Your old {} website scored <b>{before} out of 100</b> on our Generative Engine Optimization \
             (GEO) audit \u{2014} a \"{}\" rating that means AI assistants like ChatGPT, Google AI Overview, \
             Perplexity, and Siri were largely unable to find, understand, or recommend your business.",
            config.before_label,
            score_label(before as f64)
        ))
        .body(format!(
            "Your new custom-built website scores <b>{after} out of 100</b> \u{2014} a \"{}\" rating \
             representing a <font color=\"{}\"><b>{}-point improvement ({}%)</b></font>. AI systems can now \
             read your site, extract your business data, and cite you when someone asks \"Who builds pools \
             near Stillwater, MN?\"",
            score_label(after as f64),
            palette.delta,
            signed(card.delta()),
            signed(card.percent_improvement())
        ))
        .spacer(8.0);

    let mut rows = vec![vec![
        "Category".to_string(),
        config.before_label.clone(),
        config.after_label.clone(),
        "Change".to_string(),
        "Impact".to_string(),
    ]];
    rows.extend(card.records().iter().map(|r| {
        vec![
            r.category.clone(),
            r.baseline.to_string(),
            r.improved.to_string(),
            format_delta(r.delta()),
            format!("{} pts", weighted_impact(r)),
        ]
    }));
    rows.push(vec![
        "Composite GEO Score".to_string(),
        before.to_string(),
        after.to_string(),
        signed(card.delta()),
        format!("{}%", signed(card.percent_improvement())),
    ]);

    let mut summary = table(rows, &[155.0, 55.0, 60.0, 55.0, 65.0], None, palette)?;
    let style = summary.style_mut();
    emphasize_row(style, -1, palette);
    for (i, r) in card.records().iter().enumerate() {
        let row = i as i32 + 1;
        color_delta_cell(style, 3, row, r.delta() as f64, palette);
        color_score_cell(style, 1, row, r.baseline.into(), palette);
        color_score_cell(style, 2, row, r.improved.into(), palette);
    }
    color_delta_cell(style, 3, -1, card.delta() as f64, palette);
    story.table(summary).spacer(12.0);

    story.paragraph(StyleRole::SubSubHeader, "<b>What This Means in Plain English</b>");
    story
        .bullet(
            "<b>Before:</b> When someone asked ChatGPT \"Who builds inground pools near Stillwater, MN?\", \
             your business was invisible. AI couldn't read your Wix site, couldn't find structured data to \
             extract, and had almost nothing quotable to work with.",
        )
        .bullet(
            "<b>After:</b> AI systems can now read every page, extract your business details (owner, \
             locations, hours, packages, pricing), and cite specific facts like \"$51,995 for a complete \
             18x36 package\" or \"BBB A+ rated since 1998.\"",
        )
        .bullet(format!(
            "<b>What's left:</b> The remaining {} points to reach 100 are primarily off-site work \u{2014} \
             getting more customer reviews, claiming your Yelp and Google profiles, and building third-party \
             authority. The website itself is doing its job.",
            100 - after
        ))
        .page_break();
    Ok(())
}

const SEO_VS_GEO: [[&str; 3]; 6] = [
    ["Dimension", "Traditional SEO", "GEO"],
    ["Goal", "Rank on Google page 1", "Be cited in AI answers"],
    ["Who reads your site", "Googlebot", "10+ AI crawlers (GPTBot, Claude, Siri, etc.)"],
    ["What matters most", "Keywords, backlinks, speed", "Structured data, factual density, entities"],
    ["How customers find you", "Click a link in results", "AI quotes you directly in its answer"],
    ["Winner-take-all?", "Top 10 share traffic", "AI cites 1-3 sources \u{2014} or you get nothing"],
];

const BENCHMARKS: [[&str; 3]; 6] = [
    ["Website Type", "Typical Score", "Description"],
    ["Template (Wix/Squarespace), no SEO", "15-30", "AI largely cannot read or cite the site"],
    ["Template with basic SEO", "25-40", "Some visibility, missing structured data"],
    ["Custom-built with traditional SEO", "40-60", "Good for humans, not optimized for AI"],
    ["Custom-built with active GEO", "65-85", "Structured for AI, strong entity signals"],
    ["Enterprise-level GEO program", "80-95", "Full-stack optimization"],
];

fn what_is_geo(story: &mut Story, palette: &Palette) -> Result<(), ReportError> {
    section_header(story, 2, "What Is GEO?", palette);
    story
        .body(
            "For 25 years, getting found online meant ranking on Google's first page of blue links. That era \
             is ending. Today, customers increasingly <b>ask</b> instead of <b>search</b>:",
        )
        .callout(
            "<i>\"Hey Siri, who builds inground pools near Stillwater?\"</i><br/>\
             <i>\"ChatGPT, what does an inground pool cost in Minnesota?\"</i><br/>\
             <i>\"Google, compare pool builders in the Twin Cities area.\"</i>",
        )
        .body(
            "These AI systems don't show a list of links. They read websites, synthesize information, and \
             <b>give one answer</b>. If your site isn't structured for AI to understand, you don't appear in \
             that answer \u{2014} and the customer never knows you exist. <b>Generative Engine Optimization \
             (GEO)</b> is the practice of building your website so AI systems can find you, understand what \
             you offer, and recommend you.",
        )
        .spacer(6.0)
        .table(table(SEO_VS_GEO, &[110.0, 165.0, 195.0], None, palette)?)
        .spacer(10.0)
        .paragraph(StyleRole::SubSubHeader, "<b>Industry Benchmarks</b>");

    let mut benchmarks = table(BENCHMARKS, &[175.0, 80.0, 215.0], None, palette)?;
    benchmarks
        .style_mut()
        .add(CellRange::row(1), CellStyleKind::Background(palette.danger_light))
        .add(CellRange::row(4), CellStyleKind::Background(palette.info_light));
    story
        .table(benchmarks)
        .small(
            "<i>Your Wix site (35) fell in the \"template with minimal SEO\" range. Your new site (67) places \
             you in the \"active GEO\" range \u{2014} ahead of virtually all competitors.</i>",
        )
        .page_break();
    Ok(())
}

fn score_card(story: &mut Story, config: &ComparisonConfig, card: &ScoreCard) -> Result<(), ReportError> {
    let palette = &config.palette;
    section_header(story, 3, "Score Card \u{2014} Full Comparison", palette);

    let mut rows = vec![
        ["#", "Category", "Weight", "Wix", "Wix Wtd", "Next.js", "NJS Wtd", "Delta", "Wtd Delta"]
            .map(String::from)
            .to_vec(),
    ];
    for (i, r) in card.records().iter().enumerate() {
        let (wix_wtd, njs_wtd) = (round1(r.weighted_baseline()), round1(r.weighted_improved()));
        rows.push(vec![
            (i + 1).to_string(),
            r.category.clone(),
            format!("{}%", r.weight),
            r.baseline.to_string(),
            format!("{wix_wtd:.1}"),
            r.improved.to_string(),
            format!("{njs_wtd:.1}"),
            signed(r.delta()),
            signed_decimal(njs_wtd - wix_wtd),
        ]);
    }
    rows.push(vec![
        String::new(),
        "Composite".to_string(),
        "100%".to_string(),
        card.baseline_score().to_string(),
        format!("{:.2}", card.baseline_composite()),
        card.improved_score().to_string(),
        format!("{:.2}", card.improved_composite()),
        signed(card.delta()),
        format!("{}%", signed(card.percent_improvement())),
    ]);

    let mut master = table(
        rows,
        &[20.0, 120.0, 40.0, 38.0, 45.0, 45.0, 45.0, 40.0, 55.0],
        None,
        palette,
    )?;
    let style = master.style_mut();
    emphasize_row(style, -1, palette);
    style.add(CellRange::new((2, 0), (-1, -1)), CellStyleKind::Align(TextAlign::Center));
    for (i, r) in card.records().iter().enumerate() {
        let row = i as i32 + 1;
        color_score_cell(style, 3, row, r.baseline.into(), palette);
        color_score_cell(style, 5, row, r.improved.into(), palette);
        if r.delta() > 0 {
            color_cell(style, 7, row, palette.delta);
            color_cell(style, 8, row, palette.delta);
        }
    }
    style.add(CellRange::new((7, -1), (8, -1)), CellStyleKind::TextColor(palette.delta));
    story.table(master).spacer(12.0);

    let (before, after) = score_columns(card);
    let series = [
        Series::new(
            format!("{} (Before)", config.before_label),
            before.iter().map(|&v| v as f64).collect(),
            palette.before,
        ),
        Series::new(
            format!("{} (After)", config.after_label),
            after.iter().map(|&v| v as f64).collect(),
            palette.after,
        ),
    ];
    story
        .drawing(grouped_bar_chart(&config.short_names, &series, CHART_WIDTH, 200.0, palette)?)
        .spacer(8.0)
        .callout(
            "<b>Why two categories are identical:</b> Brand Authority (42) and Platform Optimization (42) \
             measure <i>off-site</i> signals \u{2014} reviews on Google/Yelp, social media accounts, directory \
             listings. Rebuilding the website doesn't change these. They require separate business actions \
             (claiming profiles, requesting reviews).",
        )
        .page_break();
    Ok(())
}

/// "38 → 77 (+39)", or "(No Change)" when the score held.
fn score_movement(record: &ScoreRecord) -> String {
    let change = match record.delta() {
        0 => "No Change".to_string(),
        d => signed(d),
    };
    format!("{} \u{2192} {} ({change})", record.baseline, record.improved)
}

type DeepDive = fn(&mut Story, &Palette) -> Result<(), ReportError>;

/// Body of each category's deep dive, in score-card order. Each appends its
/// own trailing break.
const DEEP_DIVES: [DeepDive; 6] = [
    citability_dive,
    brand_authority_dive,
    eeat_dive,
    technical_dive,
    schema_dive,
    platform_dive,
];

fn deep_dives(story: &mut Story, config: &ComparisonConfig, card: &ScoreCard) -> Result<(), ReportError> {
    let palette = &config.palette;
    section_header(story, 4, "Category Deep Dives", palette);

    story.paragraph(StyleRole::SubSubHeader, "<b>At a Glance</b>");
    for pair in card.records().chunks(2) {
        let columns = pair
            .iter()
            .map(|r| {
                let gauge = mini_gauge(
                    &r.category,
                    r.baseline.into(),
                    r.improved.into(),
                    labels(config),
                    palette,
                );
                (240.0, Flowable::from(gauge))
            })
            .collect();
        story.side_by_side(columns);
    }
    story.spacer(8.0);

    for (i, (record, dive)) in card.records().iter().zip(DEEP_DIVES).enumerate() {
        let number = format!("4.{}", i + 1);
        sub_header(
            story,
            &format!("{number} {}", record.category),
            &format!("{number}  {} \u{2014} {}", record.category, score_movement(record)),
        );
        dive(story, palette)?;
    }
    Ok(())
}

fn citability_dive(story: &mut Story, palette: &Palette) -> Result<(), ReportError> {
    const ROWS: [[&str; 4]; 8] = [
        ["Sub-Dimension", "Wix", "Next.js", "Key Evidence"],
        ["Factual density", "Medium", "High", "4 packages \u{2192} 4 packages + 15 products + 3 tiers + 7 services"],
        ["Quotable FAQs", "0", "5", "5 FAQs with specifics: \"6-10 weeks,\" \"$300-600 permits\""],
        ["Price transparency", "1 price", "1 + 5 items", "Permits, gas, electrical, fencing, chemical pkg"],
        ["Entity clarity", "Low", "High", "Owner on every page, in schema, in llms.txt"],
        ["Service descriptions", "3 generic", "8 detailed", "Wix had template copy, not real descriptions"],
        ["Product descriptions", "Images only", "15 items", "Wix Products page: thumbnails, zero text"],
        ["Educational content", "None", "None", "Neither site \u{2014} opportunity for both"],
    ];
    story
        .body(
            "<b>What this measures:</b> How easily AI systems can extract specific, quotable facts \u{2014} \
             prices, specs, timelines, locations, and direct answers to customer questions.",
        )
        .table(table(ROWS, &[100.0, 55.0, 60.0, 255.0], None, palette)?)
        .spacer(6.0)
        .body(
            "<b>Business impact:</b> When a potential customer asks an AI about pool costs, services, or \
             products in your area, the new site provides 5-10x more citable data points. More citable data \
             means more AI recommendations.",
        )
        .spacer(10.0);
    Ok(())
}

fn brand_authority_dive(story: &mut Story, palette: &Palette) -> Result<(), ReportError> {
    const ROWS: [[&str; 4]; 6] = [
        ["Sub-Dimension", "Wix", "Next.js", "Why Identical"],
        ["Review volume", "~10-12", "~10-12", "Reviews live on Google, Yelp, BBB \u{2014} not your website"],
        ["Review sentiment", "Mixed", "Mixed", "Yelp 1.5 stars unclaimed \u{2014} external platform"],
        ["Directory presence", "15+ sites", "15+ sites", "BBB, Angi, Yellow Pages \u{2014} all off-site"],
        ["Social media", "FB, LinkedIn", "FB, LinkedIn", "Social accounts are separate from website"],
        ["Owner brand", "None online", "None online", "LinkedIn profile is a personal action"],
    ];
    story
        .body(
            "<b>What this measures:</b> Third-party evidence that your business is real, reputable, and \
             active \u{2014} reviews, directory listings, social media presence, and external mentions.",
        )
        .table(table(ROWS, &[100.0, 55.0, 60.0, 255.0], None, palette)?)
        .spacer(4.0)
        .body(
            "<b>What would move the needle:</b> Claim Yelp (+3-5 pts), get 50+ Google reviews (+8-12 pts), \
             create Instagram (+2-3 pts), complete LinkedIn profile (+1-2 pts).",
        )
        .cond_page_break(252.0);
    Ok(())
}

fn eeat_dive(story: &mut Story, palette: &Palette) -> Result<(), ReportError> {
    const ROWS: [[&str; 4]; 8] = [
        ["Sub-Dimension", "Wix", "Next.js", "Key Change"],
        ["Experience signals", "\"25+ years\" (wrong)", "\"35+ years, founded 1990\"", "Specific, verifiable claim"],
        ["Expertise depth", "3 generic services", "8 services + specs", "Equipment model numbers show expertise"],
        ["Data accuracy", "Hours conflict", "Consistent everywhere", "Single source of truth in code"],
        ["Location coverage", "1 of 3 locations", "3 of 3 locations", "Stillwater, Forest Lake now listed"],
        ["Founder visibility", "Minimal", "Strong (schema, pages)", "Mike Henry as named entity everywhere"],
        ["Visual evidence", "Gallery page exists", "No gallery page", "Wix advantage \u{2014} gap acknowledged"],
        ["FAQ coverage", "None", "5 Q&As", "Cost, timeline, liner, winter, maintenance"],
    ];
    story
        .body(
            "<b>What this measures:</b> Whether your content demonstrates real Experience, Expertise, \
             Authoritativeness, and Trustworthiness \u{2014} the four signals AI uses to decide which source \
             to cite.",
        )
        .table(table(ROWS, &[90.0, 100.0, 105.0, 175.0], None, palette)?)
        .spacer(4.0)
        .callout(
            "<b>Honest acknowledgment:</b> The Wix site had a Gallery page with project photos \u{2014} visual \
             proof of completed projects. The new site does not yet have this. Adding a gallery with real \
             photography is a high-priority next step.",
        )
        .cond_page_break(288.0);
    Ok(())
}

fn technical_dive(story: &mut Story, palette: &Palette) -> Result<(), ReportError> {
    const ROWS: [[&str; 3]; 9] = [
        ["Sub-Dimension", "Wix", "Next.js"],
        ["Rendering method", "Client-side JavaScript", "Static prerendering (SSG) \u{2014} complete HTML"],
        ["AI crawler permissions", "Wix default (no AI rules)", "9 AI crawlers explicitly whitelisted"],
        ["llms.txt endpoint", "Not possible on Wix", "Dynamic, auto-generated from source data"],
        ["Sitemap quality", "Basic auto-generated", "Priority-weighted, 8 URLs"],
        ["Per-page Open Graph", "None / basic Wix", "Full OG per page (title, desc, image, URL)"],
        ["Canonical URLs", "Not configured", "Set per page"],
        ["Geo meta tags", "None", "Region, placename, GPS coordinates"],
        ["Code ownership", "None (Wix proprietary)", "Full source code + git history"],
    ];
    story
        .body(
            "<b>What this measures:</b> Whether AI crawlers can physically access, read, and understand your \
             website. This is the <b>largest single improvement</b> (+72 points).",
        )
        .table(table(ROWS, &[115.0, 165.0, 190.0], None, palette)?)
        .spacer(6.0)
        .callout(
            "<b>Why rendering matters:</b> When an AI crawler visits a Wix site, it gets an empty HTML shell \
             with JavaScript instructions. Many AI crawlers cannot execute JavaScript, so they see a blank \
             page. The Next.js site serves <b>complete, pre-rendered HTML instantly</b> \u{2014} no JavaScript \
             needed. Every crawler gets every word.",
        )
        .cond_page_break(252.0);
    Ok(())
}

fn schema_dive(story: &mut Story, palette: &Palette) -> Result<(), ReportError> {
    const ROWS: [[&str; 4]; 8] = [
        ["Schema Type", "Wix", "Next.js", "What It Does"],
        ["LocalBusiness", "Maybe (minimal)", "Rich (3 locations, GPS, hours, expertise)", "\"This is a real local business\""],
        ["WebSite", "No", "All pages", "\"This is an official business website\""],
        ["BreadcrumbList", "No", "7 interior pages", "Page hierarchy for AI navigation"],
        ["FAQPage", "No", "5 Q&As (Services)", "Machine-readable FAQ extraction"],
        ["Product + Offer", "No", "1 item ($51,995)", "\"This is a product you can buy\""],
        ["Review", "No", "6 reviews (Testimonials)", "\"These are real customer reviews\""],
        ["Service", "No", "Built (not yet wired)", "\"This is a specific service offered\""],
    ];
    let mut schema = table(ROWS, &[90.0, 80.0, 115.0, 185.0], None, palette)?;
    let style = schema.style_mut();
    for (row, [_, wix, njs, _]) in ROWS.iter().enumerate().skip(1) {
        let row = row as i32;
        if *wix == "No" {
            color_cell(style, 1, row, palette.danger);
        }
        if njs.starts_with("Built") {
            color_cell(style, 2, row, palette.warning);
        } else {
            color_cell(style, 2, row, palette.success);
        }
    }
    story
        .body(
            "<b>What this measures:</b> Machine-readable labels that tell AI exactly what each piece of \
             content represents. Think of schema as name tags \u{2014} without them, AI has to guess.",
        )
        .table(schema)
        .cond_page_break(180.0);
    Ok(())
}

fn platform_dive(story: &mut Story, palette: &Palette) -> Result<(), ReportError> {
    const ROWS: [[&str; 4]; 6] = [
        ["Platform", "Status", "Action Needed", "Est. Impact"],
        ["Google Business Profile", "Not optimized", "Claim and optimize for all 3 locations", "+5-8 pts"],
        ["Yelp", "Unclaimed (1.5 stars)", "Claim and respond to reviews", "+2-3 pts"],
        ["Instagram", "Not present", "Create account, post project photos", "+3-5 pts"],
        ["Houzz", "Not present", "Create profile with portfolio", "+2-3 pts"],
        ["YouTube", "Not present", "Create channel (high effort)", "+2-3 pts"],
    ];
    let mut platforms = table(ROWS, &[115.0, 105.0, 175.0, 75.0], None, palette)?;
    let style = platforms.style_mut();
    for (row, [_, status, _, _]) in ROWS.iter().enumerate().skip(1) {
        if status.starts_with("Not") || status.starts_with("Unclaimed") {
            color_cell(style, 1, row as i32, palette.danger);
        }
    }
    style.add(CellRange::new((3, 1), (3, -1)), CellStyleKind::TextColor(palette.delta));
    story
        .body(
            "<b>What this measures:</b> How well your business is represented on platforms AI uses as \
             reference sources \u{2014} Google, Yelp, social media, and industry directories.",
        )
        .table(platforms)
        .page_break();
    Ok(())
}

fn changed_vs_stayed(story: &mut Story, config: &ComparisonConfig, card: &ScoreCard) -> Result<(), ReportError> {
    let palette = &config.palette;
    section_header(story, 5, "What Changed vs. What Stayed the Same", palette);

    let names: Vec<String> = card.records().iter().map(|r| r.category.clone()).collect();
    let (before, after) = score_columns(card);
    story
        .drawing(comparison_bars(&names, &before, &after, CHART_WIDTH, palette)?)
        .spacer(10.0);

    let (mut changed, unchanged): (Vec<&ScoreRecord>, Vec<&ScoreRecord>) =
        card.records().iter().partition(|r| r.delta() != 0);
    changed.sort_by_key(|r| std::cmp::Reverse(r.delta()));

    let mut changed_rows = vec![vec![
        format!("Website Improvements ({} categories)", changed.len()),
        "Score Change".to_string(),
    ]];
    changed_rows.extend(changed.iter().map(|r| {
        vec![
            r.category.clone(),
            format!("{} pts ({} \u{2192} {})", signed(r.delta()), r.baseline, r.improved),
        ]
    }));
    let mut changed_table = table(changed_rows, &[190.0, 105.0], Some(palette.delta), palette)?;
    for (i, r) in changed.iter().enumerate() {
        color_cell(changed_table.style_mut(), 1, i as i32 + 1, palette.change(r.delta() as f64));
    }

    let mut unchanged_rows = vec![vec![
        format!("Business Presence ({} categories)", unchanged.len()),
        "Score".to_string(),
    ]];
    unchanged_rows.extend(
        unchanged
            .iter()
            .map(|r| vec![r.category.clone(), format!("{} (unchanged)", r.baseline)]),
    );
    let mut unchanged_table = table(unchanged_rows, &[125.0, 80.0], Some(palette.text_secondary), palette)?;
    unchanged_table
        .style_mut()
        .add(CellRange::new((1, 1), (1, -1)), CellStyleKind::TextColor(palette.text_secondary));

    let gains: Vec<i64> = changed.iter().map(|r| r.delta()).filter(|d| *d > 0).collect();
    let average_gain = if gains.is_empty() {
        0
    } else {
        (gains.iter().sum::<i64>() as f64 / gains.len() as f64).round() as i64
    };
    story
        .side_by_side(vec![
            (295.0, changed_table.into()),
            (12.0, Flowable::Spacer(0.0)),
            (205.0, unchanged_table.into()),
        ])
        .spacer(10.0)
        .callout(format!(
            "<b>Key insight:</b> The website rebuild captured <b>all available on-site gains</b>. The {} \
             website-controlled categories jumped by an average of {average_gain} points. The remaining {} \
             points to 100 require <b>off-site business work</b> \u{2014} reviews, profiles, social media. The \
             foundation is built; now the business presence needs to catch up.",
            gains.len(),
            100 - card.improved_score()
        ))
        .page_break();
    Ok(())
}

fn business_impact(story: &mut Story, config: &ComparisonConfig, card: &ScoreCard) -> Result<(), ReportError> {
    let palette = &config.palette;
    section_header(story, 6, "Business Impact", palette);

    story
        .body(format!(
            "<b>What a {}-point GEO improvement means for lead generation:</b>",
            card.delta()
        ))
        .spacer(6.0)
        .paragraph(
            StyleRole::SubSubHeader,
            "Example Query: \"Who builds inground pools near Stillwater, MN?\"",
        );

    let query = vec![
        vec![
            String::new(),
            format!("{} (GEO {})", config.before_label, card.baseline_score()),
            format!("{} (GEO {})", config.after_label, card.improved_score()),
        ],
        ["AI can read the site?", "Unreliable (JavaScript rendering)", "Yes \u{2014} complete HTML instantly"]
            .map(String::from)
            .to_vec(),
        ["Structured business data?", "None or minimal", "3 locations, hours, GPS, 14 service area cities"]
            .map(String::from)
            .to_vec(),
        ["Quotable facts?", "1 price ($51,995), limited context", "$51,995 + cost breakdown + FAQs + specs"]
            .map(String::from)
            .to_vec(),
        ["Result", "Unlikely to appear in AI answer", "Strong candidate for AI recommendation"]
            .map(String::from)
            .to_vec(),
    ];
    let mut query_table = table(query, &[120.0, 175.0, 175.0], None, palette)?;
    let style = query_table.style_mut();
    color_cell(style, 1, -1, palette.danger);
    color_cell(style, 2, -1, palette.success);
    style.add(CellRange::row(-1), CellStyleKind::Font(BuiltinFont::HelveticaBold));

    const ROI: [[&str; 2]; 4] = [
        ["Metric", "Value"],
        ["Average complete pool package", "$51,995"],
        ["Potential maintenance customer LTV", "$1,500-$3,000/year"],
        ["Cost of one lost lead to competitor", "Entire package revenue ($51,995+)"],
    ];
    story
        .table(query_table)
        .spacer(10.0)
        .paragraph(StyleRole::SubSubHeader, "<b>ROI Context</b>")
        .table(table(ROI, &[220.0, 250.0], Some(palette.accent), palette)?)
        .spacer(6.0)
        .body(
            "The enhanced website needs to generate <b>one additional qualified lead per year</b> to deliver \
             substantial ROI. With AI search growing as a lead source, being the structured, citable business \
             in your market is a compounding advantage.",
        )
        .spacer(10.0)
        .paragraph(StyleRole::SubSubHeader, "<b>Competitive Positioning</b>")
        .body(format!(
            "Your competitors in the Twin Cities pool builder market are almost certainly running standard \
             template websites without AI crawler whitelisting, llms.txt endpoints, rich schema markup, or \
             structured FAQ content. A GEO score of {} likely puts you <b>ahead of every competitor</b> for \
             AI visibility. When a customer asks ChatGPT or Perplexity for pool builder recommendations in \
             your area, you're structured to be cited first.",
            card.improved_score()
        ))
        .page_break();
    Ok(())
}

/// Action table of one roadmap tier; the impact column is tinted as a gain.
fn tier_table<const N: usize>(rows: [[&str; 5]; N], header: Color, palette: &Palette) -> Result<Table, ReportError> {
    let mut tier = table(rows, &[20.0, 220.0, 55.0, 48.0, 65.0], Some(header), palette)?;
    tier.style_mut()
        .add(CellRange::new((2, 1), (2, -1)), CellStyleKind::TextColor(palette.delta));
    Ok(tier)
}

fn roadmap(story: &mut Story, config: &ComparisonConfig, card: &ScoreCard) -> Result<(), ReportError> {
    let palette = &config.palette;
    section_header(story, 7, "Roadmap to 80+", palette);

    let tier1 = tier_table(
        [
            ["#", "Action", "Impact", "Effort", "Owner"],
            ["1", "Wire up Service schema on Services page (8 services)", "+2 pts", "15 min", "Developer"],
            ["2", "Add star ratings + aggregateRating to reviews", "+1-2 pts", "15 min", "Developer"],
            ["3", "Add Product schema to Products page (15 items)", "+1-2 pts", "30 min", "Developer"],
            ["4", "Create branded og:image.jpg (1200x630)", "+0.5 pts", "30 min", "Dev/Design"],
            ["5", "Configure custom domain on Vercel", "+1 pt", "15 min", "Developer"],
            ["6", "Claim Yelp listing and respond to reviews", "+2-3 pts", "30 min", "Owner"],
        ],
        palette.success,
        palette,
    )?;
    let tier2 = tier_table(
        [
            ["#", "Action", "Impact", "Effort", "Owner"],
            ["7", "Add project gallery page with real photos", "+3-4 pts", "2-4 hrs", "Owner + Dev"],
            ["8", "Add price ranges to remaining 3 packages", "+1-2 pts", "30 min", "Owner + Dev"],
            ["9", "Create 3 educational articles", "+2-3 pts", "8-12 hrs", "Owner + Dev"],
            ["10", "Add HowTo + ContactPoint schema", "+1 pt", "35 min", "Developer"],
            ["11", "Add privacy policy page", "+0.5 pts", "1 hr", "Developer"],
        ],
        palette.info,
        palette,
    )?;
    let tier3 = tier_table(
        [
            ["#", "Action", "Impact", "Effort", "Owner"],
            ["12", "Review generation campaign (50+ Google reviews)", "+8-12 pts", "Ongoing", "Owner + Staff"],
            ["13", "Claim Google Business Profile (3 locations)", "+3-5 pts", "3-4 hrs", "Owner"],
            ["14", "Create Instagram, post project photos", "+2-3 pts", "Ongoing", "Owner/Mktg"],
            ["15", "Complete Mike Henry's LinkedIn profile", "+1-2 pts", "1-2 hrs", "Owner"],
            ["16", "Get listed on Houzz with portfolio", "+1-2 pts", "2-3 hrs", "Owner"],
        ],
        palette.accent,
        palette,
    )?;

    story
        .body(format!(
            "The current score of {} can reach 80+ within 6 months through three tiers of work.",
            card.improved_score()
        ))
        .spacer(4.0)
        .drawing(timeline(&config.milestones, CHART_WIDTH, 110.0, palette))
        .spacer(8.0)
        .paragraph(StyleRole::SubHeader, "Tier 1: Quick Wins (0-2 Weeks) \u{2014} Est. +5-8 Points")
        .table(tier1)
        .spacer(8.0)
        .paragraph(
            StyleRole::SubHeader,
            "Tier 2: Content Expansion (2-8 Weeks) \u{2014} Est. +5-8 Points",
        )
        .table(tier2)
        .spacer(8.0)
        .keep_together(|s| {
            s.paragraph(
                StyleRole::SubHeader,
                "Tier 3: Off-Site Authority (Ongoing) \u{2014} Est. +10-15 Points",
            )
            .table(tier3);
        })
        .page_break();
    Ok(())
}

/// "(AI Citability x 0.25) + (Brand Authority x 0.20) + ..."
fn scoring_formula(card: &ScoreCard) -> String {
    let terms: Vec<String> = card
        .records()
        .iter()
        .map(|r| format!("({} x {:.2})", r.category, f64::from(r.weight) / 100.0))
        .collect();
    format!("GEO Score = {}", terms.join(" + "))
}

fn methodology(story: &mut Story, card: &ScoreCard, palette: &Palette) -> Result<(), ReportError> {
    section_header(story, 8, "Methodology", palette);

    const INTERPRETATION: [[&str; 3]; 6] = [
        ["Range", "Rating", "Meaning"],
        ["90-100", "Excellent", "Top-tier GEO; highly likely to be cited by AI"],
        ["75-89", "Good", "Strong foundation with room to improve"],
        ["60-74", "Fair", "Moderate presence; significant opportunities"],
        ["40-59", "Poor", "Weak signals; AI struggles to cite or recommend"],
        ["0-39", "Critical", "Largely invisible to AI systems"],
    ];
    let mut interpretation = table(INTERPRETATION, &[60.0, 70.0, 340.0], None, palette)?;
    let style = interpretation.style_mut();
    let ratings = [palette.success, palette.info, palette.info, palette.warning, palette.danger];
    for (i, color) in ratings.into_iter().enumerate() {
        let row = i as i32 + 1;
        color_cell(style, 1, row, color);
        bold_cell(style, 1, row);
    }

    const SOURCES: [[&str; 3]; 7] = [
        ["Source", "Location", "Purpose"],
        ["Wix site scrape", "scripts/scraped-data/wix-content.md", "All \"before\" evidence"],
        ["New site codebase", "src/, public/", "All \"after\" evidence"],
        ["GEO Audit Report", "GEO-AUDIT-REPORT.md", "All Next.js scores (exact match)"],
        ["Schema generators", "src/lib/schema.ts", "7 generators proving schema coverage"],
        ["AI crawler config", "src/app/robots.ts", "9 AI crawler user-agent rules"],
        ["llms.txt endpoint", "src/app/llms.txt/route.ts", "Dynamic AI-readable summary"],
    ];

    story
        .paragraph(StyleRole::SubSubHeader, "<b>Scoring Formula</b>")
        .callout(scoring_formula(card))
        .paragraph(StyleRole::SubSubHeader, "<b>Score Interpretation</b>")
        .table(interpretation)
        .spacer(8.0)
        .paragraph(StyleRole::SubSubHeader, "<b>Data Sources</b>")
        .table(table(SOURCES, &[100.0, 185.0, 185.0], None, palette)?)
        .spacer(8.0)
        .paragraph(StyleRole::SubSubHeader, "<b>Notes on Scoring Integrity</b>")
        .bullet(
            "Off-site scores (Brand Authority, Platform Optimization) are intentionally identical for both \
             sites \u{2014} these measure signals outside the website.",
        )
        .bullet("Wix schema score (12) gives benefit of the doubt for possible auto-injected LocalBusiness markup.")
        .bullet(
            "The Wix site had a Gallery page with project photos. The new site does not yet have this \
             \u{2014} acknowledged as a gap.",
        )
        .bullet("All Next.js scores match GEO-AUDIT-REPORT.md exactly \u{2014} no rounding or adjustment.")
        .page_break();
    Ok(())
}

const CRAWLERS: [[&str; 4]; 13] = [
    ["AI Crawler", "Platform", "Wix", "Next.js"],
    ["GPTBot", "ChatGPT (OpenAI)", "Wildcard only", "Explicitly whitelisted"],
    ["ChatGPT-User", "ChatGPT browse", "Wildcard only", "Explicitly whitelisted"],
    ["Google-Extended", "Gemini (Google)", "Wildcard only", "Explicitly whitelisted"],
    ["PerplexityBot", "Perplexity AI", "Wildcard only", "Explicitly whitelisted"],
    ["anthropic-ai", "Claude (Anthropic)", "Wildcard only", "Explicitly whitelisted"],
    ["Claude-Web", "Claude web search", "Wildcard only", "Explicitly whitelisted"],
    ["Applebot-Extended", "Siri / Apple Intelligence", "Wildcard only", "Explicitly whitelisted"],
    ["CCBot", "Common Crawl", "Wildcard only", "Explicitly whitelisted"],
    ["cohere-ai", "Cohere AI models", "Wildcard only", "Explicitly whitelisted"],
    ["Bytespider", "TikTok / ByteDance", "Wildcard only", "Wildcard only"],
    ["Meta-ExternalAgent", "Meta AI", "Wildcard only", "Wildcard only"],
    ["Amazonbot", "Alexa / Amazon", "Wildcard only", "Wildcard only"],
];

const SCHEMA_MATRIX: [[&str; 4]; 13] = [
    ["Schema Type", "Wix", "Next.js", "Page(s)"],
    ["HomeAndConstructionBusiness", "Maybe (minimal)", "Yes (rich)", "All pages"],
    ["WebSite", "No", "Yes", "All pages"],
    ["BreadcrumbList", "No", "Yes", "7 interior pages"],
    ["FAQPage", "No", "Yes", "Services"],
    ["Product + Offer", "No", "Yes (1 item)", "Packages"],
    ["Review", "No", "Yes (6 reviews)", "Testimonials"],
    ["Service", "No", "Built (not wired)", "\u{2014}"],
    ["Person (founder)", "No", "Yes (embedded)", "All pages"],
    ["GeoCoordinates", "No", "Yes (3 locations)", "All pages"],
    ["OpeningHoursSpec", "No", "Yes", "All pages"],
    ["aggregateRating", "No", "No", "\u{2014}"],
    ["reviewRating", "No", "No", "\u{2014}"],
];

const BEFORE_PAGES: [[&str; 3]; 8] = [
    ["Page", "Content Quality", "GEO Issues"],
    ["Home", "Hours listed, basic intro", "Hours conflict with Contact page"],
    ["About", "Company story, brands, award", "Outdated \"25+ years\""],
    ["Packages", "4 packages, 1 price", "Only 1 of 4 packages priced"],
    ["Products", "Image thumbnails only", "Zero text \u{2014} AI gets nothing"],
    ["Gallery", "Project photos", "Visual evidence (advantage)"],
    ["Testimonials", "6 real testimonials", "No schema markup"],
    ["Contact", "1 location, basic form", "Only Willernie listed"],
];

const AFTER_PAGES: [[&str; 3]; 11] = [
    ["Page", "Schema Types", "Content Quality"],
    ["Home", "LocalBusiness, WebSite", "Trust signals, CTAs, consistent data"],
    ["Services", "+ FAQPage, Breadcrumb", "8 services, 5 FAQs, 4-step process"],
    ["Packages", "+ Product (1), Breadcrumb", "4 packages with full specs"],
    ["Products", "+ Breadcrumb", "5 categories, 15 products"],
    ["Plans & Pricing", "+ Breadcrumb", "3 tiers, 7 services"],
    ["About", "+ Breadcrumb", "Accurate history, awards, brands"],
    ["Testimonials", "+ Review (6), Breadcrumb", "6 real reviews"],
    ["Contact", "+ Breadcrumb", "3 locations, 8-field form"],
    ["robots.txt", "\u{2014}", "9 AI crawlers whitelisted"],
    ["llms.txt", "\u{2014}", "Full AI-readable business summary"],
];

const GLOSSARY: [[&str; 2]; 15] = [
    ["Term", "Definition"],
    ["GEO", "Generative Engine Optimization \u{2014} making your website findable by AI"],
    ["AI Crawler", "A program that reads websites for AI systems (e.g., GPTBot for ChatGPT)"],
    ["Schema Markup", "Machine-readable labels telling AI what your content represents"],
    ["JSON-LD", "Code format for schema \u{2014} invisible to visitors, readable by machines"],
    ["E-E-A-T", "Experience, Expertise, Authoritativeness, Trustworthiness"],
    ["llms.txt", "A special page formatted specifically for AI systems to read"],
    ["robots.txt", "A file telling crawlers what they can access on your site"],
    ["Open Graph", "Tags controlling how pages appear when shared on social media"],
    ["Canonical URL", "Tag telling search engines \"this is the official page version\""],
    ["SSG", "Static Site Generation \u{2014} pages built in advance for instant loading"],
    ["CSR", "Client-Side Rendering \u{2014} browser must run JavaScript to see content"],
    ["NAP", "Name, Address, Phone \u{2014} must be identical everywhere for AI trust"],
    ["Rich Results", "Enhanced search appearances (stars, FAQs, breadcrumbs)"],
    ["CDN", "Content Delivery Network \u{2014} serves your site from the nearest server"],
];

/// Colour for a presence status cell: green when present, amber when partial,
/// red when missing.
fn status_color(status: &str, palette: &Palette) -> Option<Color> {
    if status.starts_with("Yes") || status.starts_with("Explicitly") {
        Some(palette.success)
    } else if status.starts_with("Built") || status.starts_with("Wildcard") {
        Some(palette.warning)
    } else if status == "No" {
        Some(palette.danger)
    } else {
        None
    }
}

fn appendices(story: &mut Story, config: &ComparisonConfig) -> Result<(), ReportError> {
    let palette = &config.palette;
    section_header(story, 9, "Appendices", palette);

    let mut crawlers = table(CRAWLERS, &[100.0, 120.0, 95.0, 110.0], None, palette)?;
    let style = crawlers.style_mut();
    for (row, [_, _, wix, njs]) in CRAWLERS.iter().enumerate().skip(1) {
        for (col, status) in [(2, wix), (3, njs)] {
            if let Some(color) = status_color(status, palette) {
                color_cell(style, col, row as i32, color);
            }
        }
    }
    sub_header(story, "Appendix A", "Appendix A: AI Crawler Access Matrix");
    story
        .table(crawlers)
        .spacer(6.0)
        .small(
            "<i>Explicit whitelisting signals intent \u{2014} it tells AI systems \"we want you here.\" \
             Additionally, Wix's client-side rendering means even allowed crawlers may get empty content.</i>",
        )
        .cond_page_break(288.0);

    let mut schema = table(SCHEMA_MATRIX, &[130.0, 85.0, 110.0, 100.0], None, palette)?;
    let style = schema.style_mut();
    for (row, [_, wix, njs, _]) in SCHEMA_MATRIX.iter().enumerate().skip(1) {
        let row = row as i32;
        if *wix == "No" {
            color_cell(style, 1, row, palette.danger);
        }
        if let Some(color) = status_color(njs, palette) {
            color_cell(style, 2, row, color);
        }
    }
    sub_header(story, "Appendix B", "Appendix B: Schema Coverage Matrix");
    story.table(schema).cond_page_break(216.0);

    sub_header(story, "Appendix C", "Appendix C: Pages Analyzed");
    story
        .paragraph(
            StyleRole::SubSubHeader,
            format!("<b>{} Site (7 pages)</b>", config.before_label),
        )
        .table(table(BEFORE_PAGES, &[70.0, 170.0, 200.0], Some(palette.before), palette)?)
        .spacer(8.0)
        .paragraph(
            StyleRole::SubSubHeader,
            format!("<b>{} Site (8 pages + infrastructure)</b>", config.after_label),
        )
        .table(table(AFTER_PAGES, &[80.0, 150.0, 210.0], Some(palette.after), palette)?)
        .cond_page_break(216.0);

    sub_header(story, "Appendix D", "Appendix D: Glossary");
    story
        .table(table(GLOSSARY, &[90.0, 380.0], None, palette)?)
        .spacer(20.0)
        .rule(0.5, palette.rule, 8.0)
        .small(
            "This report was generated using a structured 6-category GEO scoring methodology. All Wix data \
             verified against Playwright headless browser scrape (February 26, 2026). All Next.js data \
             verified against the live codebase. Off-site signals verified via live platform searches.",
        )
        .small(
            "Companion reports: docs/audit/wix-vs-nextjs-comparison.md (technical comparison)  |  \
             GEO-AUDIT-REPORT.md (detailed Next.js audit with issue-level findings)",
        );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use geo_layout::Paragraph;

    fn report() -> Report {
        let ctx = RunContext::new(NaiveDate::from_ymd_opt(2026, 2, 26).unwrap());
        build(&ComparisonConfig::default(), &ctx).unwrap()
    }

    fn paragraphs(elements: &[Flowable]) -> Vec<&Paragraph> {
        elements
            .iter()
            .filter_map(|e| match e {
                Flowable::Paragraph(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    fn tables(elements: &[Flowable]) -> Vec<&Table> {
        elements
            .iter()
            .filter_map(|e| match e {
                Flowable::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn nine_numbered_sections_are_bookmarked() {
        let report = report();
        let sections: Vec<&str> = report
            .document
            .elements()
            .iter()
            .filter_map(|e| match e {
                Flowable::Bookmark { title, level: 1 } => Some(title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(sections.len(), 9);
        assert_eq!(sections[0], "1. Executive Summary");
        assert_eq!(sections[8], "9. Appendices");
    }

    #[test]
    fn cover_details_carry_the_composites() {
        let report = report();
        let cover = tables(report.document.elements())[0];
        let cells: Vec<&str> = cover.rows().iter().map(|r| r[1].as_str()).collect();
        assert_eq!(
            &cells[2..],
            &["35/100 \u{2014} Critical", "67/100 \u{2014} Fair", "+32 points (+91%)"]
        );
    }

    #[test]
    fn summary_impact_uses_weighted_change() {
        let report = report();
        let summary = tables(report.document.elements())[1];
        let impacts: Vec<&str> = summary.rows().iter().skip(1).map(|r| r[4].as_str()).collect();
        assert_eq!(
            impacts,
            vec!["+9.8 pts", "\u{2014} pts", "+5.8 pts", "+10.8 pts", "+5.3 pts", "\u{2014} pts", "+91%"]
        );
        let deltas: Vec<&str> = summary.rows().iter().skip(1).map(|r| r[3].as_str()).collect();
        assert_eq!(deltas, vec!["+39", "\u{2014}", "+29", "+72", "+53", "\u{2014}", "+32"]);
    }

    #[test]
    fn master_table_rounds_weighted_values_before_subtracting() {
        let report = report();
        let master = tables(report.document.elements())
            .into_iter()
            .find(|t| t.rows()[0][0] == "#" && t.rows()[0].len() == 9)
            .unwrap();
        let citability = &master.rows()[1];
        assert_eq!(citability[4], "9.5");
        assert_eq!(citability[6], "19.2");
        assert_eq!(citability[8], "+9.7");
        assert_eq!(master.rows()[2][8], "0.0");
        let composite = master.rows().last().unwrap();
        assert_eq!(composite[4], "35.00");
        assert_eq!(composite[6], "66.65");
    }

    #[test]
    fn deep_dive_headings_follow_the_score_card() {
        let report = report();
        let headings: Vec<&str> = paragraphs(report.document.elements())
            .into_iter()
            .filter(|p| p.style.name == "SubHeader" && p.markup.starts_with("4."))
            .map(|p| p.markup.as_str())
            .collect();
        assert_eq!(headings.len(), 6);
        assert_eq!(headings[0], "4.1  AI Citability \u{2014} 38 \u{2192} 77 (+39)");
        assert_eq!(headings[1], "4.2  Brand Authority \u{2014} 42 \u{2192} 42 (No Change)");
    }

    #[test]
    fn tier_three_is_kept_together() {
        let report = report();
        let group = report
            .document
            .elements()
            .iter()
            .find_map(|e| match e {
                Flowable::KeepTogether(inner) => Some(inner),
                _ => None,
            })
            .unwrap();
        assert_eq!(group.len(), 2);
        assert!(matches!(&group[0], Flowable::Paragraph(p) if p.markup.starts_with("Tier 3")));
    }

    #[test]
    fn scoring_formula_lists_every_weight() {
        let card = ComparisonConfig::default().scorecard().unwrap();
        let formula = scoring_formula(&card);
        assert!(formula.starts_with("GEO Score = (AI Citability x 0.25) + (Brand Authority x 0.20)"));
        assert!(formula.ends_with("(Platform Optimization x 0.10)"));
    }

    #[test]
    fn invalid_weights_fail_the_build() {
        let mut config = ComparisonConfig::default();
        config.categories[0].weight = 30;
        let ctx = RunContext::new(NaiveDate::from_ymd_opt(2026, 2, 26).unwrap());
        assert!(matches!(build(&config, &ctx), Err(ReportError::InvalidScoreCard(_))));
    }
}
