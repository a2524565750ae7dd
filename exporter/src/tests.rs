//! FILENAME: exporter/src/tests.rs
//! PURPOSE: Consolidated end-to-end tests for the conversion pipeline.

use model::{CodeList, Contact, Download, Metadata, Reference};
use persistence::{Cell, CellValue, Row, Style, Workbook};

use crate::convert::{convert, ConvertOptions};
use crate::error::ExportError;

/// Three aggregates for one geography over two months, mixing integer and
/// decimal observations.
const CPIH: &str = "\
V4_0,mmm-yy,time,uk-only,geography,cpih1dim1aggid,aggregate
86.8,Feb-96,Feb-96,K02000001,United Kingdom,cpih1dim1A0,Overall Index
86.2,Jan-96,Jan-96,K02000001,United Kingdom,cpih1dim1A0,Overall Index
55,Jan-96,Jan-96,K02000001,United Kingdom,cpih1dim1G50,Transport
55.9,Feb-96,Feb-96,K02000001,United Kingdom,cpih1dim1G50,Transport
48.1,Jan-96,Jan-96,K02000001,United Kingdom,cpih1dim1G40,Housing
";

fn basic_metadata() -> Metadata {
    Metadata {
        title: Some("Consumer Price Inflation".to_string()),
        ..Metadata::default()
    }
}

fn run(input: &str, metadata: &Metadata) -> crate::Conversion {
    convert(input.as_bytes(), metadata, &ConvertOptions::default()).unwrap()
}

/// Drain every sheet into plain row vectors for inspection.
fn sheets(workbook: Workbook) -> Vec<(String, Vec<Row>)> {
    workbook
        .sheets
        .into_iter()
        .map(|sheet| {
            let name = sheet.name.clone();
            let mut rows = Vec::new();
            sheet
                .for_each_row(|_, row| {
                    rows.push(row);
                    Ok(())
                })
                .unwrap();
            (name, rows)
        })
        .collect()
}

fn dataset_rows(input: &str, metadata: &Metadata) -> Vec<Row> {
    let conversion = run(input, metadata);
    let mut sheets = sheets(conversion.workbook);
    let (name, rows) = sheets.remove(0);
    assert_eq!(name, crate::DATASET_SHEET_NAME);
    rows
}

// ========================================
// DATASET SHEET LAYOUT
// ========================================

#[test]
fn one_data_row_per_distinct_dimension_combination() {
    let rows = dataset_rows(CPIH, &basic_metadata());
    // Title row + header row + three groups.
    assert_eq!(rows.len(), 5);
}

#[test]
fn title_row_carries_the_dataset_title_in_bold() {
    let rows = dataset_rows(CPIH, &basic_metadata());
    assert_eq!(
        rows[0][0],
        Cell::text_with_style("Consumer Price Inflation", Style::Bold)
    );
}

#[test]
fn corner_cell_lists_dimension_names_alphabetically() {
    let rows = dataset_rows(CPIH, &basic_metadata());
    assert_eq!(
        rows[1][0],
        Cell::text_with_style("aggregate\ngeography", Style::Bold)
    );
}

#[test]
fn recognized_labels_order_chronologically() {
    // Feb-96 appears first in the file but Jan-96 must come first.
    let rows = dataset_rows(CPIH, &basic_metadata());
    assert_eq!(rows[1][1], Cell::text_with_style("Jan-96", Style::Bold));
    assert_eq!(rows[1][2], Cell::text_with_style("Feb-96", Style::Bold));
}

#[test]
fn unrecognized_labels_order_lexically() {
    let input = "\
V4_0,quarter,time,uk-only,geography
1,Q3,Q3,K02000001,United Kingdom
2,Q1,Q1,K02000001,United Kingdom
3,Q2,Q2,K02000002,Scotland
";
    let rows = dataset_rows(input, &basic_metadata());
    assert_eq!(rows[1][1], Cell::text_with_style("Q1", Style::Bold));
    assert_eq!(rows[1][2], Cell::text_with_style("Q2", Style::Bold));
    assert_eq!(rows[1][3], Cell::text_with_style("Q3", Style::Bold));
}

#[test]
fn groups_sort_by_display_values() {
    let rows = dataset_rows(CPIH, &basic_metadata());
    // Geography is identical, so the aggregate decides.
    assert_eq!(rows[2][0], Cell::text("United Kingdom\nHousing"));
    assert_eq!(rows[3][0], Cell::text("United Kingdom\nOverall Index"));
    assert_eq!(rows[4][0], Cell::text("United Kingdom\nTransport"));
}

#[test]
fn rows_differing_only_in_time_collapse_into_one_row() {
    let rows = dataset_rows(CPIH, &basic_metadata());
    let overall = &rows[3];
    assert_eq!(overall[1], Cell::number(86.2, Style::Decimal));
    assert_eq!(overall[2], Cell::number(86.8, Style::Decimal));
}

#[test]
fn every_observation_lands_in_exactly_one_cell() {
    let rows = dataset_rows(CPIH, &basic_metadata());
    let populated: usize = rows[2..]
        .iter()
        .map(|row| {
            row[1..]
                .iter()
                .filter(|cell| cell.value != CellValue::Empty)
                .count()
        })
        .sum();
    // Five observation rows in the input, none duplicated.
    assert_eq!(populated, 5);
    // Housing has no Feb-96 observation.
    assert_eq!(rows[2][2], Cell::empty());
}

#[test]
fn integer_and_decimal_observations_use_their_own_styles() {
    let rows = dataset_rows(CPIH, &basic_metadata());
    let transport = &rows[4];
    assert_eq!(transport[1], Cell::number(55.0, Style::Integer));
    assert_eq!(transport[2], Cell::number(55.9, Style::Decimal));
}

#[test]
fn non_numeric_observations_are_blanked_and_counted() {
    let input = "\
V4_0,mmm-yy,time,uk-only,geography
86.8,Jan-96,Jan-96,K02000001,United Kingdom
*,Feb-96,Feb-96,K02000001,United Kingdom
12,Jan-96,Jan-96,K02000002,Scotland
";
    let conversion = run(input, &basic_metadata());
    assert_eq!(conversion.report.blanked_observations, 1);

    let rows = sheets(conversion.workbook).remove(0).1;
    // United Kingdom sorts after Scotland; its Feb-96 cell is blank.
    assert_eq!(rows[3][0], Cell::text("United Kingdom"));
    assert_eq!(rows[3][2], Cell::empty());
}

#[test]
fn column_widths_follow_titles_and_representative_label() {
    let conversion = run(CPIH, &basic_metadata());
    let widths = &conversion.workbook.sheets[0].column_widths;
    // Longest title line is "United Kingdom" (14 chars).
    assert_eq!(widths.get(&0), Some(&14.0));
    // "Jan-96" is 6 chars plus fixed padding, applied to every data column.
    assert_eq!(widths.get(&1), Some(&11.0));
    assert_eq!(widths.get(&2), Some(&11.0));
}

// ========================================
// DIMENSION CATALOG ORDERING
// ========================================

#[test]
fn metadata_dimension_catalog_reorders_display_columns() {
    let metadata = Metadata {
        title: Some("CPIH".to_string()),
        dimensions: vec![
            CodeList {
                name: Some("aggregate".to_string()),
                label: None,
                description: None,
            },
            CodeList {
                name: Some("geography".to_string()),
                label: None,
                description: None,
            },
        ],
        ..Metadata::default()
    };
    let rows = dataset_rows(CPIH, &metadata);
    // Aggregate now leads both the title and the comparison.
    assert_eq!(rows[2][0], Cell::text("Housing\nUnited Kingdom"));
    assert_eq!(rows[3][0], Cell::text("Overall Index\nUnited Kingdom"));
}

// ========================================
// REPORT & ERRORS
// ========================================

#[test]
fn report_counts_groups_and_labels() {
    let conversion = run(CPIH, &basic_metadata());
    assert_eq!(conversion.report.groups, 3);
    assert_eq!(conversion.report.time_labels, 2);
    assert_eq!(conversion.report.label_fallbacks, 0);
}

#[test]
fn header_only_input_fails_with_a_parse_error() {
    let input = "V4_0,mmm-yy,time,uk-only,geography\n";
    let result = convert(
        input.as_bytes(),
        &basic_metadata(),
        &ConvertOptions::default(),
    );
    assert!(matches!(result, Err(ExportError::Parse(_))));
}

// ========================================
// STREAMING & DETERMINISM
// ========================================

#[test]
fn conversion_is_idempotent() {
    let first = sheets(run(CPIH, &basic_metadata()).workbook);
    let second = sheets(run(CPIH, &basic_metadata()).workbook);
    assert_eq!(first, second);
}

#[test]
fn a_tiny_row_window_produces_identical_output() {
    let metadata = basic_metadata();
    let wide = sheets(run(CPIH, &metadata).workbook);
    let narrow = convert(CPIH.as_bytes(), &metadata, &ConvertOptions { window_rows: 1 }).unwrap();
    assert_eq!(sheets(narrow.workbook), wide);
}

#[test]
fn workbook_serializes_to_xlsx_bytes() {
    let conversion = run(CPIH, &basic_metadata());
    let bytes = conversion.workbook.save_to_buffer().unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}

// ========================================
// METADATA SHEET
// ========================================

fn metadata_rows(metadata: &Metadata) -> Vec<Row> {
    let conversion = run(CPIH, metadata);
    let mut sheets = sheets(conversion.workbook);
    let (name, rows) = sheets.remove(1);
    assert_eq!(name, crate::METADATA_SHEET_NAME);
    rows
}

fn has_header(rows: &[Row], header: &str) -> bool {
    rows.iter()
        .any(|row| row.first() == Some(&Cell::text_with_style(header, Style::Bold)))
}

#[test]
fn headline_fields_render_as_label_value_pairs() {
    let metadata = Metadata {
        title: Some("CPIH".to_string()),
        release_date: Some("2017-02-14".to_string()),
        national_statistic: Some(true),
        ..Metadata::default()
    };
    let rows = metadata_rows(&metadata);

    assert_eq!(rows[0], vec![Cell::text("Title"), Cell::text("CPIH")]);
    assert_eq!(
        rows[1],
        vec![Cell::text("Release date"), Cell::text("2017-02-14")]
    );
    assert_eq!(
        rows[2],
        vec![Cell::text("National Statistic"), Cell::text("Yes")]
    );
    // Blank separator closes the headline section.
    assert_eq!(rows[3], Vec::<Cell>::new());
}

#[test]
fn hyperlink_fields_render_as_links_showing_the_url() {
    let metadata = Metadata {
        uri: Some("https://example.org/datasets/cpih".to_string()),
        ..Metadata::default()
    };
    let rows = metadata_rows(&metadata);
    assert_eq!(
        rows[0],
        vec![
            Cell::text("URL"),
            Cell::link("https://example.org/datasets/cpih"),
        ]
    );
}

#[test]
fn empty_sections_emit_no_header() {
    let rows = metadata_rows(&basic_metadata());
    assert!(!has_header(&rows, "Contacts"));
    assert!(!has_header(&rows, "Alerts"));
    assert!(!has_header(&rows, "Available downloads"));
}

#[test]
fn populated_sections_appear_in_fixed_order() {
    let metadata = Metadata {
        title: Some("CPIH".to_string()),
        contacts: vec![Contact {
            name: Some("Consumer Price Inflation team".to_string()),
            email: Some("cpi@example.org".to_string()),
            telephone: None,
        }],
        publications: vec![Reference {
            title: Some("CPIH article".to_string()),
            href: Some("https://example.org/articles/cpih".to_string()),
            description: None,
        }],
        downloads: vec![Download {
            extension: Some("csv".to_string()),
            size: Some("124000".to_string()),
            href: Some("https://example.org/cpih.csv".to_string()),
        }],
        ..Metadata::default()
    };
    let rows = metadata_rows(&metadata);

    let position = |header: &str| {
        rows.iter()
            .position(|row| row.first() == Some(&Cell::text_with_style(header, Style::Bold)))
            .unwrap()
    };
    let contacts = position("Contacts");
    let publications = position("Publications");
    let downloads = position("Available downloads");
    assert!(contacts < publications && publications < downloads);

    assert!(rows.contains(&vec![
        Cell::text("Email"),
        Cell::text("cpi@example.org"),
    ]));
    assert!(rows.contains(&vec![
        Cell::text("CSV (124000 bytes)"),
        Cell::link("https://example.org/cpih.csv"),
    ]));
}
