use crate::config::ConverterConfig;
use crate::domain::{EmorError, EmorResult, ParameterTable};
use crate::emit::write_parameter_header;
use crate::parser::parse_parameter_table;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    pub basename: String,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub declaration_count: usize,
    pub value_count: usize,
}

pub fn read_parameter_table(path: &Path) -> EmorResult<ParameterTable> {
    let bytes = fs::read(path).map_err(|source| {
        EmorError::io_system(
            "IO.INPUT_READ",
            format!("failed to read '{}': {}", path.display(), source),
        )
    })?;
    Ok(parse_parameter_table(&String::from_utf8_lossy(&bytes)))
}

pub fn convert_basename(config: &ConverterConfig, basename: &str) -> EmorResult<ConversionReport> {
    let input_path = config.input_path(basename);
    let output_path = config.output_path(basename);

    let table = read_parameter_table(&input_path)?;
    tracing::debug!(
        basename,
        keys = table.len(),
        values = table.value_count(),
        "parsed parameter table"
    );

    let declaration_count = write_header_file(&output_path, &table, basename, config)?;
    tracing::info!(
        input = %input_path.display(),
        output = %output_path.display(),
        declarations = declaration_count,
        "converted parameter file"
    );

    Ok(ConversionReport {
        basename: basename.to_string(),
        input_path,
        output_path,
        declaration_count,
        value_count: table.value_count(),
    })
}

/// Converts every configured basename in order, stopping at the first
/// failure. Headers written before the failure are left in place.
pub fn run_conversions(config: &ConverterConfig) -> EmorResult<Vec<ConversionReport>> {
    config.validate()?;
    config
        .basenames
        .iter()
        .map(|basename| convert_basename(config, basename))
        .collect()
}

fn write_header_file(
    path: &Path,
    table: &ParameterTable,
    basename: &str,
    config: &ConverterConfig,
) -> EmorResult<usize> {
    let write_error = |source: std::io::Error| {
        EmorError::io_system(
            "IO.OUTPUT_WRITE",
            format!("failed to write '{}': {}", path.display(), source),
        )
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    let declaration_count = write_parameter_header(
        &mut writer,
        table,
        basename,
        &config.class_name,
        config.index_width,
    )
    .map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(declaration_count)
}
