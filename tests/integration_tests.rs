//! Integration tests for pos2neoden
//!
//! This module contains tests for the entire conversion pipeline
//! and individual component functionality.

use std::{fs, path::PathBuf};
use tempfile::TempDir;

use pos2neoden::{
    config::Config,
    converter::Converter,
    mapping,
    neoden::{self, OutputRow},
    position::{self, ComponentRecord},
};

/// A small KiCad-style position file covering mapped and unmapped parts
const TEST_POSITION_FILE: &str = "\
Ref,Val,Package,PosX,PosY,Rot\n\
R1,10K,R_0603_1608Metric,1.234,5.678,0\n\
C1,100nF,C_0402_1005Metric,10.5,20.25,90\n\
U1,STM32F103,LQFP-100_14x14mm_P0.5mm,50.0,60.0,-45.5\n\
FID1,Fiducial,Fiducial_1.5mm_Mask3mm,3,4,0\n";

/// Create a temporary directory holding a position file with the given content
fn create_test_input(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("board.pos");
    fs::write(&input_path, content).expect("Failed to write test input");
    (temp_dir, input_path)
}

/// Create a test configuration
fn create_test_config(input: PathBuf, output: PathBuf) -> Config {
    Config {
        input,
        output,
        verbose: false,
        no_progress: true, // Disable progress bars in tests
    }
}

/// Run a full conversion and return the output file's lines
fn run_conversion(content: &str) -> Vec<String> {
    let (temp_dir, input_path) = create_test_input(content);
    let output_path = temp_dir.path().join("board-neoden.csv");

    let config = create_test_config(input_path, output_path.clone());
    let mut converter = Converter::new(config);
    converter.run().expect("Conversion should succeed");

    let output = fs::read_to_string(&output_path).expect("Output file should exist");
    output.lines().map(|l| l.to_string()).collect()
}

#[test]
fn test_full_conversion_pipeline() {
    let lines = run_conversion(TEST_POSITION_FILE);

    // 12 header rows plus one data row per component
    assert_eq!(lines.len(), 12 + 4);

    // Fixed preamble
    assert_eq!(lines[0], "NEODEN,YY1,P&P FILE,,,,,,,,,,");
    assert_eq!(lines[1], ",,,,,,,,,,,,");
    assert_eq!(
        lines[2],
        "PanelizedPCB,UnitLength,0,UnitWidth,0,Rows,1,Columns,1,,,,,"
    );
    assert_eq!(
        lines[4],
        "Fiducial,1-X,5.20,1-Y,55.15,OverallOffsetX,0.04,OverallOffsetY,0.14,,,,,,"
    );
    assert!(lines[6].starts_with("NozzleChange,OFF,BeforeComponent,1,Head1"));
    assert!(lines[11].starts_with("Designator,Comment,Footprint,Mid X(mm)"));

    // R1's value is overridden to 1K and its footprint remapped to 0603D
    assert_eq!(lines[12], "R1,1K,0603D,1.23,5.68,0.00,0,1,100,0.0,0.0,1,0");

    // Unmapped footprint and value pass through unchanged
    assert_eq!(
        lines[13],
        "C1,100nF,C_0402_1005Metric,10.50,20.25,90.00,0,1,100,0.0,0.0,1,0"
    );

    // Negative rotation keeps its sign, integer coordinates gain decimals
    assert_eq!(
        lines[14],
        "U1,STM32F103,LQFP-100,50.00,60.00,-45.50,0,1,100,0.0,0.0,1,0"
    );
    assert_eq!(
        lines[15],
        "FID1,Fiducial,FIDUCIAL,3.00,4.00,0.00,0,1,100,0.0,0.0,1,0"
    );
}

#[test]
fn test_row_count_and_order_preserved() {
    let lines = run_conversion(TEST_POSITION_FILE);
    let data_lines = &lines[12..];

    let designators: Vec<&str> = data_lines
        .iter()
        .map(|l| l.split(',').next().unwrap())
        .collect();

    assert_eq!(designators, ["R1", "C1", "U1", "FID1"]);
}

#[test]
fn test_header_block_identical_across_runs() {
    let first = run_conversion(TEST_POSITION_FILE);
    let second = run_conversion("Ref,Val,Package,PosX,PosY,Rot\nC9,1uF,SOT-23,0,0,0\n");

    assert_eq!(first[..12], second[..12]);
}

#[test]
fn test_empty_input_produces_header_only() {
    let lines = run_conversion("Ref,Val,Package,PosX,PosY,Rot\n");
    assert_eq!(lines.len(), 12);
}

#[test]
fn test_output_uses_crlf() {
    let (temp_dir, input_path) = create_test_input(TEST_POSITION_FILE);
    let output_path = temp_dir.path().join("out.csv");

    let config = create_test_config(input_path, output_path.clone());
    let mut converter = Converter::new(config);
    converter.run().expect("Conversion should succeed");

    let output = fs::read_to_string(&output_path).expect("Output file should exist");
    assert!(output.ends_with("\r\n"));
    assert_eq!(output.matches("\r\n").count(), 12 + 4);
}

#[test]
fn test_conversion_stats() {
    let (temp_dir, input_path) = create_test_input(TEST_POSITION_FILE);
    let output_path = temp_dir.path().join("out.csv");

    let config = create_test_config(input_path, output_path);
    let mut converter = Converter::new(config);
    converter.run().expect("Conversion should succeed");

    let stats = converter.get_conversion_stats();
    assert_eq!(stats.components_converted, 4);
    // R1, U1 and FID1 have mapped footprints; C1 does not
    assert_eq!(stats.footprints_remapped, 3);
    // Only R1 matches the "R" value prefix
    assert_eq!(stats.values_overridden, 1);
}

#[test]
fn test_malformed_number_aborts_run() {
    let (temp_dir, input_path) =
        create_test_input("Ref,Val,Package,PosX,PosY,Rot\nR1,10K,SOT-23,abc,2.0,0\n");
    let output_path = temp_dir.path().join("out.csv");

    let config = create_test_config(input_path, output_path.clone());
    let mut converter = Converter::new(config);

    let result = converter.run();
    assert!(result.is_err());

    // Input is read in full before any output, so nothing was written
    assert!(!output_path.exists());
}

#[test]
fn test_missing_column_aborts_run() {
    let (temp_dir, input_path) =
        create_test_input("Ref,Val,PosX,PosY,Rot\nR1,10K,1.0,2.0,0\n");
    let output_path = temp_dir.path().join("out.csv");

    let config = create_test_config(input_path, output_path.clone());
    let mut converter = Converter::new(config);

    let result = converter.run();
    assert!(result.is_err());
    assert!(!output_path.exists());

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Package"));
}

#[test]
fn test_missing_input_file_aborts_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input_path = temp_dir.path().join("missing.pos");
    let output_path = temp_dir.path().join("out.csv");

    let config = create_test_config(input_path, output_path.clone());
    let mut converter = Converter::new(config);

    let result = converter.run();
    assert!(result.is_err());
    assert!(!output_path.exists());
}

#[test]
fn test_quoted_fields_are_stripped() {
    let lines = run_conversion(
        "Ref,Val,Package,PosX,PosY,Rot\n\
         \"\"\"R5\"\"\",\"\"\"22K\"\"\",\"\"\"R_0402_1005Metric\"\"\",7.5,8.25,270\n",
    );

    assert_eq!(
        lines[12],
        "R5,1K,0402D,7.50,8.25,270.00,0,1,100,0.0,0.0,1,0"
    );
}

#[test]
fn test_record_reader_roundtrip() {
    let (_temp_dir, input_path) = create_test_input(TEST_POSITION_FILE);
    let records = position::read_records(&input_path).expect("Should read input");

    assert_eq!(records.len(), 4);
    assert_eq!(
        records[0],
        ComponentRecord {
            designator: "R1".to_string(),
            value: "10K".to_string(),
            footprint: "R_0603_1608Metric".to_string(),
            x: 1.234,
            y: 5.678,
            rotation: 0.0,
        }
    );
}

#[test]
fn test_mapping_tables_match_machine_setup() {
    assert_eq!(mapping::map_footprint("R_0201_0603Metric"), "0201D");
    assert_eq!(mapping::map_footprint("TO-252-2"), "TO-252-2");
    assert_eq!(mapping::resolve_value("R12", "4K7"), "1K");
    assert_eq!(mapping::resolve_value("Q1", "BC847"), "BC847");
}

#[test]
fn test_output_row_field_count() {
    let record = ComponentRecord {
        designator: "D1".to_string(),
        value: "LED".to_string(),
        footprint: "LED_0603".to_string(),
        x: 0.0,
        y: 0.0,
        rotation: 0.0,
    };

    let row = OutputRow::from_record(&record);
    assert_eq!(row.to_fields().len(), neoden::FIELD_COUNT);
}
