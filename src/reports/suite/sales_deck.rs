use super::common::{DRAWING_WIDTH, GAP, SuiteDoc};
use crate::config::{RunContext, SuiteConfig};
use crate::error::ReportError;
use crate::reports::Report;
use crate::scoring::{percent_improvement, signed};
use crate::widgets::{big_stat_row, case_study_visual, horizontal_bars};
use geo_layout::{CellRange, CellStyleKind};

/// Dimension weights; the bars show them scaled by four.
const WEIGHTS: [(&str, u32); 6] = [
    ("AI Citability", 25),
    ("Brand Authority", 20),
    ("Content E-E-A-T", 20),
    ("Technical GEO", 15),
    ("Schema", 10),
    ("Platform Optimization", 10),
];

const DELIVERABLES: [(&str, &str); 6] = [
    (
        "Comprehensive GEO Audit",
        "6-dimension analysis across all AI platforms with composite scoring, severity-classified findings, \
         and platform readiness ratings.",
    ),
    (
        "Prioritized Action Plan",
        "Quick wins (this week), medium-term improvements (this month), and strategic initiatives (this \
         quarter) organized by impact and effort.",
    ),
    (
        "Schema & Structured Data",
        "Complete JSON-LD implementation covering LocalBusiness, Service, Product, Review, FAQ, HowTo, \
         Article, and Person schemas.",
    ),
    (
        "Content Optimization",
        "Blog infrastructure, educational content, and content restructuring for maximum AI citability and \
         E-E-A-T signals.",
    ),
    (
        "Technical Infrastructure",
        "AI crawler access configuration, llms.txt, sitemap optimization, and rendering improvements for AI \
         system compatibility.",
    ),
    (
        "Measurement Framework",
        "Ongoing citation tracking, Share of Model monitoring, and AI-referred traffic attribution setup.",
    ),
];

const TIERS: [[&str; 4]; 4] = [
    ["Tier", "Scope", "Timeline", "Ideal For"],
    ["Foundation", "GEO audit + quick wins + schema", "4-8 weeks", "Businesses new to GEO"],
    ["Growth", "Foundation + content strategy + blog", "3-6 months", "Businesses ready to invest"],
    ["Authority", "Growth + cross-platform + PR + ongoing", "6-12 months", "Market leadership goals"],
];

fn case_rows(before: u32, after: u32) -> Vec<[String; 4]> {
    let pct = percent_improvement(f64::from(before), f64::from(after));
    let fixed = |cells: [&str; 4]| cells.map(str::to_string);
    vec![
        fixed(["Metric", "Before (Wix)", "After (GEO)", "Change"]),
        [
            "GEO Composite Score".to_string(),
            format!("{before}/100"),
            format!("{after}/100"),
            format!("{}%", signed(pct)),
        ],
        fixed(["Schema Types", "0", "7", "+7 types"]),
        fixed(["AI Crawler Access", "0 of 9", "9 of 9", "Full access"]),
        fixed(["Blog/Educational Content", "None", "3 articles", "New"]),
        fixed(["Gallery with Alt Text", "None", "13 images", "New"]),
        fixed(["Structured Product Data", "None", "15 products", "New"]),
        fixed(["Review Schema", "None", "6 reviews + aggregate", "New"]),
    ]
}

/// The client-facing pitch, closing with the investment tiers and a call
/// to action.
pub fn sales_deck(config: &SuiteConfig, ctx: &RunContext) -> Result<Report, ReportError> {
    let mut doc = SuiteDoc::new(
        config,
        ctx,
        "GEO Sales Deck",
        &["Is Your Business", "Visible to AI?"],
        "How Generative Engine Optimization Drives Revenue in the AI Search Era",
        &[format!("{}  |  Confidential", ctx.month_year())],
    );
    let palette = doc.palette();
    let usable = config.setup.usable_width();

    doc.story
        .drawing(big_stat_row(
            &[
                ("2B+", "Monthly AI Search Users"),
                ("2-7", "Sites Cited Per Query"),
                ("+123%", "AI Traffic Growth (SMBs)"),
            ],
            DRAWING_WIDTH,
            palette,
        ))
        .page_break();

    doc.section("The Problem")
        .body_large(
            "Your customers are asking AI for recommendations. If your business is not in the answer, you are \
             invisible to a growing majority of search traffic.",
        )
        .spacer(GAP)
        .body(
            "AI-powered search engines (Google AI Overviews, ChatGPT, Perplexity, Gemini) now serve billions \
             of users. Unlike traditional search, they do not show 10 blue links. They synthesize a single \
             answer, citing only <b>2-7 sources</b>. If you are not one of those sources, you receive zero \
             traffic from that query.",
        )
        .spacer(GAP)
        .callout(
            "Traditional SEO is not enough. A site can rank #1 on Google and still be <b>completely \
             absent</b> from AI-generated answers. Domain authority (DA) now has only a 0.18 correlation with \
             AI citations. The rules have changed.",
        )
        .page_break();

    let bars: Vec<(&str, u32)> = WEIGHTS.iter().map(|&(name, weight)| (name, weight * 4)).collect();
    doc.section("The Solution: GEO")
        .body(
            "Generative Engine Optimization (GEO) is a systematic approach to making your business \
             <b>discoverable, understandable, and citable</b> by AI search systems. Our proprietary \
             6-dimension audit and optimization framework targets the specific signals that AI platforms use \
             to select sources.",
        )
        .spacer(GAP)
        .drawing(horizontal_bars(&bars, DRAWING_WIDTH, palette))
        .spacer(GAP)
        .body(
            "<i>Each dimension is scored 0-100, producing a weighted composite GEO score that benchmarks your \
             AI search readiness.</i>",
        )
        .page_break();

    let (before, after) = config.case_study;
    let mut case = doc.table(case_rows(before, after), &[140.0, 90.0, 100.0, 80.0], None)?;
    case.style_mut()
        .add(CellRange::new((3, 1), (3, -1)), CellStyleKind::TextColor(palette.success));
    doc.section("Case Study: Local Business Transformation")
        .body(
            "A family-owned pool and spa business in the Twin Cities, MN metro area migrated from Wix to a \
             GEO-optimized platform. Results after implementation:",
        )
        .spacer(GAP)
        .drawing(case_study_visual(i64::from(before), i64::from(after), usable, palette))
        .spacer(GAP)
        .table(case)
        .spacer(GAP)
        .body(
            "Phase 2 implementation (additional schema wiring, blog expansion, gallery) projects to push the \
             score to <b>80-83/100 (Good)</b> within 90 days.",
        )
        .page_break();

    doc.section("What You Get");
    for (title, description) in DELIVERABLES {
        doc.subsection(title).body(description);
    }
    doc.story.page_break();

    doc.section("The ROI of GEO")
        .body("GEO is not a cost center; it is a competitive moat that compounds over time:")
        .spacer(GAP)
        .bullet("AI referral traffic to small businesses grew <b>+123%</b> in recent months")
        .bullet(
            "Pages with strong E-E-A-T at rank #6-10 get cited <b>2.3x more</b> than #1 pages with weak authority",
        )
        .bullet("Content with fact density > 1:80 is <b>4.2x more likely</b> to be cited")
        .bullet("Foundation work produces measurable results within <b>90 days</b>")
        .bullet("Entity authority compounds: early movers create barriers to competitor entry")
        .spacer(GAP)
        .callout(
            "<b>The opportunity window is now.</b> 47% of brands lack any GEO strategy. Those who act first \
             establish the entity authority and citation patterns that AI systems will reference for years to \
             come.",
        )
        .page_break();

    let tiers = doc.accent_table(TIERS, &[70.0, 160.0, 80.0, 150.0])?;
    doc.section("Investment Tiers")
        .table(tiers)
        .spacer(GAP)
        .body(
            "<i>Industry benchmarks: Mid-market brands invest $75k-$150k/year on GEO. Enterprise brands invest \
             $250k+ annually. Our system delivers enterprise-grade methodology at accessible price points.</i>",
        )
        .spacer(30.0)
        .callout(
            "<b>Next Step:</b> Request a complimentary GEO audit of your website. See exactly where you stand, \
             what your competitors are doing, and what it would take to get your business into the AI answer.",
        );

    Ok(doc.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_study_row_follows_the_configured_scores() {
        let rows = case_rows(35, 67);
        assert_eq!(rows[1], ["GEO Composite Score", "35/100", "67/100", "+91%"]);
        let rows = case_rows(40, 80);
        assert_eq!(rows[1][3], "+100%");
        assert_eq!(rows.len(), 8);
    }
}
