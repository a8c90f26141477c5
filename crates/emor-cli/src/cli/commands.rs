use super::{Cli, CliError};
use anyhow::Context;
use emor_core::{ConversionReport, ConverterConfig, run_conversions};
use std::fs;
use std::path::Path;

impl Cli {
    fn to_config(&self) -> ConverterConfig {
        ConverterConfig::with_dirs(&self.input_dir, &self.output_dir)
    }
}

pub(super) fn run_convert_command(cli: Cli) -> Result<i32, CliError> {
    let config = cli.to_config();
    let reports = run_conversions(&config).map_err(CliError::Convert)?;

    for report in &reports {
        println!(
            "Wrote {} ({} arrays, {} values)",
            report.output_path.display(),
            report.declaration_count,
            report.value_count
        );
    }

    if let Some(report_path) = &cli.report {
        write_json_report(report_path, &reports)?;
        println!("JSON report: {}", report_path.display());
    }

    Ok(0)
}

fn write_json_report(path: &Path, reports: &[ConversionReport]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create report directory '{}'", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(reports).context("failed to serialize report")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write report '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), entries = reports.len(), "wrote JSON report");
    Ok(())
}
