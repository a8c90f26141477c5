use emor_core::parser::parse_parameter_table;
use emor_core::{ConverterConfig, EmorErrorCategory, run_conversions};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const EXPECTED_PREAMBLE: &str = "/*
*
* Sensor response curve data converted from 'emor.txt'
*
* The EMOR model was proposed and described by  M.D. Grossberg
* and S.K. Nayar from the University of Columbia (Computer
* Vision Laboratory). For more information on EMoR please visit
*
* http://www.cs.columbia.edu/CAVE/software/softlib/dorf.php
*
*/
/// @cond
";

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directory should be created");
    }
    fs::write(path, content).expect("file should be written");
}

fn declaration_lines(header: &str) -> Vec<&str> {
    header
        .lines()
        .filter(|line| line.starts_with("const double "))
        .collect()
}

#[test]
fn small_table_renders_exact_header() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(
        &temp.path().join("emor.txt"),
        "foo =\n1.0 2.0 3.0\nc(1) =\n4.0 5.0 6.0 7.0 8.0 9.0 10.0 11.0 12.0\n",
    );

    let mut config = ConverterConfig::with_dirs(temp.path(), temp.path());
    config.basenames = vec!["emor".to_string()];
    let reports = run_conversions(&config).expect("conversion should succeed");
    assert_eq!(reports.len(), 1);

    let header = fs::read_to_string(temp.path().join("modpar_emor.h")).expect("header");
    let expected = format!(
        "{}{}{}{}{}",
        EXPECTED_PREAMBLE,
        "const double GammaEMOR::foo_[] = {\n1.0, 2.0, 3.0};\n",
        "const double GammaEMOR::c01_[] = {\n4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, ",
        "\n12.0};\n",
        "/// @endcond\n"
    );
    assert_eq!(header, expected);
}

#[test]
fn emor_shaped_input_keeps_key_count_and_values() {
    let temp = TempDir::new().expect("tempdir should be created");
    let mut source = String::from("E =  % energy samples\n");
    for row in 0..3 {
        let values: Vec<String> = (0..4)
            .map(|col| format!("{:.6e}", (row * 4 + col) as f64 / 11.0))
            .collect();
        source.push_str(&format!("   {}\n", values.join("   ")));
    }
    source.push_str("f0 =\n0.0 0.25 0.5 0.75 1.0\n");
    for index in [2, 11, 1, 10] {
        source.push_str(&format!("h({index}) =\n"));
        source.push_str(&format!("{index}e-3 -{index}e-3 n/a\n"));
    }
    write_file(&temp.path().join("emor.txt"), &source);
    write_file(
        &temp.path().join("invemor.txt"),
        "B =\n0.0 1.0\ng0 =\n\ng0 =\n2.0\n",
    );

    let config = ConverterConfig::with_dirs(temp.path(), temp.path());
    let reports = run_conversions(&config).expect("conversion should succeed");
    assert_eq!(reports.len(), 2);

    let emor = fs::read_to_string(temp.path().join("modpar_emor.h")).expect("emor header");
    let names: Vec<&str> = declaration_lines(&emor)
        .into_iter()
        .map(|line| {
            line.trim_start_matches("const double GammaEMOR::")
                .split("_[]")
                .next()
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(names, ["E", "f0", "h01", "h02", "h10", "h11"]);
    assert_eq!(reports[0].declaration_count, 6);
    assert_eq!(reports[0].value_count, 12 + 5 + 4 * 2);

    let table = parse_parameter_table(&source);
    assert_eq!(table.get("h(11)"), Some(&[11e-3, -11e-3][..]));
    assert_eq!(table.get("E").map(<[f64]>::len), Some(12));

    let invemor =
        fs::read_to_string(temp.path().join("modpar_invemor.h")).expect("invemor header");
    assert!(invemor.contains("converted from 'invemor.txt'"));
    assert_eq!(
        declaration_lines(&invemor),
        ["const double GammaEMOR::B_[] = {", "const double GammaEMOR::g0_[] = {"]
    );
    assert!(invemor.contains("GammaEMOR::g0_[] = {\n2.0};"));
}

#[test]
fn failure_on_second_file_leaves_first_header_on_disk() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(&temp.path().join("emor.txt"), "f0 =\n1.0\n");

    let config = ConverterConfig::with_dirs(temp.path(), temp.path());
    let error = run_conversions(&config).expect_err("invemor.txt is missing");

    assert_eq!(error.category(), EmorErrorCategory::IoSystemError);
    assert!(error.message().contains("invemor.txt"));
    assert!(temp.path().join("modpar_emor.h").is_file());
    assert!(!temp.path().join("modpar_invemor.h").exists());
}

#[test]
fn output_dir_is_independent_of_input_dir() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input_dir = temp.path().join("data");
    let output_dir = temp.path().join("include");
    write_file(&input_dir.join("emor.txt"), "f0 =\n1.0\n");
    write_file(&input_dir.join("invemor.txt"), "g0 =\n1.0\n");
    fs::create_dir_all(&output_dir).expect("output dir should be created");

    let config = ConverterConfig::with_dirs(&input_dir, &output_dir);
    let reports = run_conversions(&config).expect("conversion should succeed");

    assert_eq!(reports[1].output_path, output_dir.join("modpar_invemor.h"));
    assert!(output_dir.join("modpar_emor.h").is_file());
    assert!(!input_dir.join("modpar_emor.h").exists());
}

#[test]
fn missing_output_dir_is_reported_as_write_failure() {
    let temp = TempDir::new().expect("tempdir should be created");
    write_file(&temp.path().join("emor.txt"), "f0 =\n1.0\n");

    let config = ConverterConfig::with_dirs(temp.path(), temp.path().join("absent"));
    let error = run_conversions(&config).expect_err("output dir does not exist");

    assert_eq!(error.placeholder(), "IO.OUTPUT_WRITE");
    assert_eq!(error.exit_code(), 3);
}
