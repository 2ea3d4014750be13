use clap::Parser;
use geo_reports::reports::comparison;
use geo_reports::{ComparisonConfig, ReportError, RunContext, group_thousands, write_report};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Generates the Wix vs. Next.js GEO comparison report.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to write the PDF
    #[arg(default_value = "docs/audit/GEO-Comparison-Wix-vs-NextJS.pdf")]
    output: PathBuf,

    /// Print the generation summary as JSON instead of the one-line message
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<(), ReportError> {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "geo_reports=info");
        }
    }
    env_logger::init();

    let args = Args::parse();
    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let report = comparison::build(&ComparisonConfig::default(), &RunContext::today())?;
    let summary = write_report(report, &args.output)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!(
            "PDF generated: {} ({} bytes / {:.0} KB)",
            summary.path.display(),
            group_thousands(summary.bytes),
            summary.kilobytes
        );
    }
    Ok(())
}
