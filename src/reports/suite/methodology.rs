use super::common::{GAP, SuiteDoc, version_line};
use crate::config::{RunContext, SuiteConfig};
use crate::error::ReportError;
use crate::reports::Report;

const CONTENTS: [&str; 11] = [
    "1. Audit Workflow Overview",
    "2. AI Citability Analysis (25%)",
    "3. Brand Authority Assessment (20%)",
    "4. Content E-E-A-T Evaluation (20%)",
    "5. Technical GEO Infrastructure (15%)",
    "6. Schema & Structured Data (10%)",
    "7. Platform Optimization (10%)",
    "8. Platform-Specific Strategies",
    "9. The E-E-A-T Revolution",
    "10. Content Strategy for Citations",
    "11. Measurement & Tools",
];

const MODULES: [[&str; 3]; 6] = [
    ["Module", "Focus", "Key Metrics"],
    ["Citability Analyzer", "AI quotability", "Passage self-containment, answer blocks, stat density"],
    ["Brand Analyzer", "Entity recognition", "YouTube, Reddit, Wikipedia, LinkedIn presence"],
    ["Technical Analyzer", "Crawler access", "robots.txt, llms.txt, rendering, meta tags"],
    ["Content Analyzer", "E-E-A-T signals", "Author bios, credentials, freshness, depth"],
    ["Schema Analyzer", "Structured data", "JSON-LD types, completeness, validation"],
];

const EEAT: [[&str; 3]; 5] = [
    ["Signal", "What AI Looks For", "Implementation"],
    ["Experience", "First-hand knowledge", "Case studies, project photos, real examples"],
    ["Expertise", "Demonstrated skill", "Author credentials, certifications, detailed how-tos"],
    ["Authoritativeness", "Recognition by others", "Awards, press, third-party mentions, reviews"],
    ["Trustworthiness", "Verifiable accuracy", "Sources cited, real data, transparent business info"],
];

const CRAWLERS: [[&str; 3]; 10] = [
    ["Crawler", "Platform", "Priority"],
    ["GPTBot", "ChatGPT / OpenAI", "Tier 1 (Critical)"],
    ["ClaudeBot", "Claude / Anthropic", "Tier 1 (Critical)"],
    ["PerplexityBot", "Perplexity AI", "Tier 1 (Critical)"],
    ["Google-Extended", "Gemini / Google AI", "Tier 1 (Critical)"],
    ["Bingbot", "Bing Copilot", "Tier 1 (Critical)"],
    ["Amazonbot", "Alexa / Amazon", "Tier 2"],
    ["Bytespider", "TikTok", "Tier 2"],
    ["ChatGPT-User", "ChatGPT Browsing", "Tier 2"],
    ["cohere-ai", "Cohere", "Tier 2"],
];

const SCHEMA_TYPES: [[&str; 3]; 12] = [
    ["Schema Type", "Purpose", "Priority"],
    ["LocalBusiness", "Business identity, NAP, hours", "Essential"],
    ["Organization", "Corporate entity recognition", "Essential"],
    ["FAQPage", "Q&A pairs AI engines extract", "Essential"],
    ["Service", "Service offerings with descriptions", "High"],
    ["Product", "Product data with pricing", "High"],
    ["Review + aggregateRating", "Social proof and trust signals", "High"],
    ["Article", "Blog/content with author attribution", "High"],
    ["HowTo", "Step-by-step processes", "Medium"],
    ["Person", "Author credentials and expertise", "Medium"],
    ["ContactPoint", "Contact information structure", "Medium"],
    ["BreadcrumbList", "Site navigation hierarchy", "Standard"],
];

const CITATION_PLATFORMS: [(&str, &str); 5] = [
    ("YouTube", "18.8% of top 10 on Google AI Overviews; 13.9% on Perplexity"),
    ("Reddit", "46.7% of Perplexity's top 10 cited sources; community trust signal"),
    ("Wikipedia", "47.9% of ChatGPT's top 10; entity recognition foundation"),
    ("LinkedIn", "Professional authority; 1.3% of Google AI Overviews"),
    ("Houzz / Yelp / BBB", "Industry-specific platforms for local business authority"),
];

/// Per-platform playbooks for section 8.
const PLAYBOOKS: [(&str, [&str; 4]); 3] = [
    (
        "Optimizing for ChatGPT",
        [
            "Prioritize encyclopedic, factual content with dense statistics",
            "\"Best X\" blog lists account for 43.8% of all cited page types",
            "Wikipedia presence is the strongest single signal (47.9% of top 10)",
            "Authoritative tone with source citations",
        ],
    ),
    (
        "Optimizing for Perplexity",
        [
            "Community presence (Reddit, forums) is the dominant signal",
            "Recency matters: Perplexity favors recently published content",
            "YouTube content is heavily cited (13.9% of top 10)",
            "2.76x more sources per query than ChatGPT (broader citation)",
        ],
    ),
    (
        "Optimizing for Google AI Overviews",
        [
            "Existing search rankings still matter (but E-E-A-T amplifies weak positions)",
            "Balanced mix of social and professional signals",
            "YouTube is #2 cited source (18.8% of top 10)",
            "Schema markup directly influences content understanding",
        ],
    ),
];

const SIGNAL_SHIFT: [[&str; 3]; 7] = [
    ["Old Signal", "New Signal", "Why"],
    ["Domain Authority (DA)", "Entity Recognition", "AI needs to identify you as a known concept"],
    ["Backlink quantity", "Cross-platform presence", "NAP consistency across all platforms"],
    ["Anchor text optimization", "Earned media coverage", "Third-party trust > self-promotion"],
    ["Keyword density", "Author credentials", "Named experts with Person schema"],
    ["Link building campaigns", "Review velocity", "Active reviews signal living business"],
    ["Content length", "Verifiable claims", "AI systems must trust before citing"],
];

const TOOLS: [[&str; 3]; 8] = [
    ["Tool/Metric", "Purpose", "Category"],
    ["Share of Model (SoM)", "Brand frequency in AI responses", "Primary KPI"],
    ["Siftly", "AI citation tracking across platforms", "Citation Monitoring"],
    ["Gauge", "Share of Model measurement", "Citation Monitoring"],
    ["Profound", "Citation pattern analysis", "Research"],
    ["Qwairy", "Provider citation behavior studies", "Research"],
    ["GA4 (AI referral)", "AI-referred traffic attribution", "Traffic Analytics"],
    ["Manual testing", "ChatGPT + Perplexity query monitoring", "Ongoing QA"],
];

/// The full audit framework: workflow, each scoring dimension, platform
/// strategies and measurement.
pub fn methodology(config: &SuiteConfig, ctx: &RunContext) -> Result<Report, ReportError> {
    let mut doc = SuiteDoc::new(
        config,
        ctx,
        "GEO Methodology Guide",
        &["GEO Methodology", "Guide"],
        "Complete Audit Framework, Scoring System & Platform Strategies",
        &[
            version_line(config, ctx),
            "For clients, partners, and technical practitioners".to_string(),
        ],
    );
    doc.story.page_break();
    doc.contents(&CONTENTS);

    doc.section("1. Audit Workflow Overview")
        .body("The GEO audit follows a three-phase process: Discovery, Parallel Analysis, and Score Aggregation.")
        .spacer(GAP);
    doc.bullet_list(
        "Phase 1: Discovery & Reconnaissance",
        &[
            "Fetch homepage, detect business type (SaaS, Local, E-commerce, Publisher, Agency)",
            "Crawl sitemap (up to 50 pages, prioritized by navigation hierarchy)",
            "Collect page-level data: headings, word count, schema, links, images, meta tags",
            "Respect robots.txt; 30-second timeout per page; 1-second delay between fetches",
        ],
    )
    .spacer(GAP);
    let modules = doc.table(MODULES, &[110.0, 100.0, 250.0], None)?;
    doc.subsection("Phase 2: Parallel Analysis")
        .body(
            "Five specialized analysis modules run in parallel, each producing a category score (0-100) with \
             detailed findings:",
        )
        .spacer(GAP)
        .table(modules)
        .spacer(GAP);
    doc.subsection("Phase 3: Score Aggregation")
        .body("The composite GEO score is computed as a weighted average:")
        .spacer(GAP)
        .callout(
            "<b>GEO Score</b> = (Citability x 0.25) + (Brand x 0.20) + (E-E-A-T x 0.20) + (Technical x 0.15) \
             + (Schema x 0.10) + (Platform x 0.10)",
        )
        .page_break();

    doc.section("2. AI Citability Analysis (25%)")
        .body(
            "This dimension measures how likely AI systems are to extract and cite passages from your content. \
             It carries the highest weight because citation is the fundamental unit of GEO success.",
        )
        .spacer(GAP);
    doc.bullet_list(
        "What Gets Measured",
        &[
            "<b>Passage self-containment:</b> Can a paragraph answer a question on its own?",
            "<b>Answer block quality:</b> Are direct answers placed in the first 200-300 words?",
            "<b>Statistical density:</b> Fact-to-word ratio (target > 1:80)",
            "<b>Heading hierarchy:</b> Clean H1>H2>H3 structure (2.8x citation boost)",
            "<b>FAQ sections:</b> Question-answer pairs AI engines extract heavily",
        ],
    )
    .spacer(GAP);
    doc.bullet_list(
        "Optimization Targets",
        &[
            "Optimal passage length for citation: <b>134-167 words</b>",
            "Lead every section with a clear, concise answer (inverted pyramid)",
            "Include TL;DR statements so sections stand alone as answers",
            "Use precise statistics: \"15%\" beats \"about 15%\"",
            "Original/proprietary data is the <b>#1 citation magnet</b>",
        ],
    )
    .page_break();

    doc.section("3. Brand Authority Assessment (20%)")
        .body(
            "AI systems need to trust an entity before citing it. Brand authority measures how recognizable and \
             trustworthy your brand is across the platforms AI models draw from.",
        )
        .spacer(GAP);
    doc.bullet_list(
        "Signals Evaluated",
        &[
            "<b>Wikipedia/Wikidata presence:</b> Wikipedia accounts for 7.8% of ChatGPT citations",
            "<b>Reddit mentions:</b> Reddit dominates Perplexity (6.6% of citations)",
            "<b>YouTube presence:</b> #2 cited source on Google AI Overviews (18.8%)",
            "<b>LinkedIn company profile:</b> Professional authority signal",
            "<b>Review volume and velocity:</b> Active reviews signal living, trusted business",
            "<b>Cross-platform NAP consistency:</b> Character-for-character match everywhere",
        ],
    )
    .spacer(GAP);
    doc.subsection("Key Insight")
        .callout(
            "AI engines favor <b>earned media</b> (third-party coverage, reviews, industry mentions) over \
             brand-owned content. A mention in a Reddit thread or YouTube review carries more citation weight \
             than a page on your own website.",
        )
        .page_break();

    let eeat = doc.accent_table(EEAT, &[90.0, 160.0, 210.0])?;
    doc.section("4. Content E-E-A-T Evaluation (20%)")
        .body(
            "Experience, Expertise, Authoritativeness, and Trustworthiness are the quality signals that \
             differentiate citable content from noise.",
        )
        .spacer(GAP)
        .table(eeat)
        .spacer(GAP);
    doc.subsection("Author Authority")
        .body(
            "Named experts with structured author bios and Person schema are significantly more likely to be \
             cited. Anonymous content underperforms. Every piece of educational content should have a named, \
             credentialed author.",
        )
        .page_break();

    let crawlers = doc.table(CRAWLERS, &[120.0, 160.0, 130.0], None)?;
    doc.section("5. Technical GEO Infrastructure (15%)")
        .body(
            "If AI crawlers cannot access your content, nothing else matters. Technical GEO ensures your site is \
             crawlable, renderable, and machine-readable.",
        )
        .spacer(GAP);
    doc.subsection("AI Crawler Access").table(crawlers).spacer(GAP);
    doc.subsection("llms.txt")
        .body(
            "An emerging standard that helps AI systems understand your site structure. While 8/9 studied sites \
             saw no measurable change, it remains a low-cost investment. Best practice: limit to 10-20 \
             high-value pages, update quarterly.",
        )
        .spacer(GAP);
    doc.bullet_list(
        "Additional Technical Factors",
        &[
            "Server-side rendering (SSR) for all public content pages",
            "Sub-3-second page load time",
            "Valid canonical URLs and no duplicate content",
            "IndexNow protocol for Bing/Copilot indexing speed",
        ],
    )
    .page_break();

    let schema = doc.table(SCHEMA_TYPES, &[140.0, 210.0, 80.0], None)?;
    doc.section("6. Schema & Structured Data (10%)")
        .body(
            "Google's May 2025 guidance explicitly recommends JSON-LD for AI content. Schema has evolved from a \
             nice-to-have to <b>critical infrastructure</b> that acts as connective tissue between websites and \
             AI agents.",
        )
        .spacer(GAP)
        .table(schema)
        .spacer(GAP)
        .body(
            "Schema contributes approximately <b>10% of Perplexity's ranking factors</b> (Qwairy). While the \
             direct weight is moderate, schema enables AI systems to understand entity relationships that \
             influence all other dimensions.",
        )
        .page_break();

    doc.section("7. Platform Optimization (10%)")
        .body(
            "Only 44% of AI citations come from owned websites. 48% come from community platforms. Your presence \
             on the platforms AI models cite from is essential.",
        )
        .spacer(GAP);
    for (name, description) in CITATION_PLATFORMS {
        doc.sub2(name).body(description);
    }
    doc.story.page_break();

    doc.section("8. Platform-Specific Strategies");
    for (i, (title, items)) in PLAYBOOKS.iter().enumerate() {
        doc.bullet_list(title, items);
        if i + 1 < PLAYBOOKS.len() {
            doc.story.spacer(GAP);
        }
    }
    doc.story.page_break();

    let shift = doc.accent_table(SIGNAL_SHIFT, &[130.0, 130.0, 200.0])?;
    doc.section("9. The E-E-A-T Revolution")
        .body(
            "The single most important shift in the GEO era: <b>entity authority has replaced domain \
             authority</b>. Traditional DA has collapsed to just r=0.18 correlation with AI citations. What \
             matters now:",
        )
        .spacer(GAP)
        .table(shift)
        .spacer(GAP)
        .callout(
            "<b>Critical insight:</b> Pages ranking #6-10 with strong E-E-A-T get cited <b>2.3x more often</b> \
             than #1 pages with weak authority. You do not need to outrank the competition; you need to \
             out-trust them.",
        )
        .page_break();

    doc.section("10. Content Strategy for AI Citations");
    doc.bullet_list(
        "What Gets Cited Most",
        &[
            "<b>Original/proprietary data</b> &mdash; First-party research is the #1 citation magnet",
            "<b>Precise statistics</b> &mdash; \"15%\" beats \"about 15%\"",
            "<b>FAQ content</b> &mdash; All AI engines heavily leverage Q&A pairs",
            "<b>Direct answers first</b> &mdash; Place response in first 200-300 words",
            "<b>Entity specificity</b> &mdash; Name + service + location in content",
            "<b>\"Best X\" lists</b> &mdash; 43.8% of ChatGPT cited page types",
        ],
    )
    .spacer(GAP);
    doc.bullet_list(
        "Content Structure Best Practices",
        &[
            "Lead with clear, concise answer (inverted pyramid)",
            "Clean H2/H3 hierarchy signals passage topics to AI systems",
            "TL;DR statements so sections stand alone as answers",
            "Include FAQ sections on every page",
            "\"Last updated\" timestamps for freshness signals",
            "Topic clusters with interlinking (30% higher citation rates)",
        ],
    )
    .page_break();

    let tools = doc.table(TOOLS, &[130.0, 200.0, 130.0], None)?;
    doc.section("11. Measurement & Tools")
        .body("GEO measurement requires new tools and metrics beyond traditional SEO analytics:")
        .spacer(GAP)
        .table(tools)
        .spacer(GAP);
    doc.bullet_list(
        "Key Performance Indicators",
        &[
            "<b>Citation frequency:</b> How often AI cites your content per relevant query",
            "<b>Share of Model:</b> Your brand's share of AI-generated responses vs competitors",
            "<b>Citation sentiment:</b> How positively AI presents your brand",
            "<b>AI-referred traffic:</b> Sessions from AI platforms (track in GA4)",
            "<b>Entity recognition:</b> Whether AI correctly identifies your brand and attributes",
        ],
    );

    Ok(doc.finish())
}
