use clap::Parser;
use geo_reports::reports::suite;
use geo_reports::{ReportError, RunContext, SuiteConfig};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Generates the four GEO system PDFs into one directory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Output directory, created if missing
    #[arg(default_value = ".")]
    output_dir: PathBuf,

    /// Print the generation summaries as JSON instead of the listing
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
    fs::create_dir_all(&args.output_dir)?;

    if !args.json {
        println!("Generating GEO System PDF Suite to: {}/", args.output_dir.display());
        println!();
    }

    let summaries = suite::write_all(&args.output_dir, &SuiteConfig::default(), &RunContext::today())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for (i, summary) in summaries.iter().enumerate() {
        println!("  {}. {:40} {:6.0} KB", i + 1, summary.file_name, summary.kilobytes);
    }
    let total: f64 = summaries.iter().map(|s| s.kilobytes).sum();
    println!("\n  Total: {:.0} KB across {} PDFs", total, summaries.len());
    println!("\nDone.");
    Ok(())
}
