mod common;

use common::{GeneratedPdf, TestResult};
use std::process::Command;

#[test]
fn comparison_cli_writes_to_the_default_path() -> TestResult {
    let dir = tempfile::tempdir()?;
    let output = Command::new(env!("CARGO_BIN_EXE_geo-comparison"))
        .current_dir(dir.path())
        .output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let path = dir.path().join("docs/audit/GEO-Comparison-Wix-vs-NextJS.pdf");
    let bytes = std::fs::read(&path)?;
    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("PDF generated: docs/audit/GEO-Comparison-Wix-vs-NextJS.pdf ("));
    assert!(stdout.contains(&format!("{:.0} KB)", bytes.len() as f64 / 1024.0)));
    assert!(GeneratedPdf::from_bytes(bytes)?.page_count() > 1);
    Ok(())
}

#[test]
fn comparison_cli_json_summary() -> TestResult {
    let dir = tempfile::tempdir()?;
    let target = dir.path().join("out/report.pdf");
    let output = Command::new(env!("CARGO_BIN_EXE_geo-comparison"))
        .arg(&target)
        .arg("--json")
        .output()?;
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(summary["file_name"], "report.pdf");
    assert_eq!(summary["bytes"].as_u64(), Some(std::fs::metadata(&target)?.len()));
    Ok(())
}

#[test]
fn suite_cli_lists_every_document() -> TestResult {
    let dir = tempfile::tempdir()?;
    let out = dir.path().join("suite");
    let output = Command::new(env!("CARGO_BIN_EXE_geo-suite")).arg(&out).output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8(output.stdout)?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], format!("Generating GEO System PDF Suite to: {}/", out.display()));
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("  1. GEO-System-Overview.pdf "));
    assert!(lines[5].starts_with("  4. GEO-Technical-Reference.pdf "));
    assert!(stdout.contains("across 4 PDFs"));
    assert!(stdout.trim_end().ends_with("Done."));

    for name in [
        "GEO-System-Overview.pdf",
        "GEO-Sales-Deck.pdf",
        "GEO-Methodology-Guide.pdf",
        "GEO-Technical-Reference.pdf",
    ] {
        assert!(out.join(name).is_file(), "{name} missing");
    }
    Ok(())
}
