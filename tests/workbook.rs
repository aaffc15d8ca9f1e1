use std::fs;
use std::path::Path;

use rsvp_guests::GuestError;
use rsvp_guests::convert::{ConvertConfig, convert_workbook};
use rsvp_guests::model::GuestRecord;
use rust_xlsxwriter::Workbook;
use tempfile::tempdir;

/// Writes a guest list laid out as `(row, [name, plus_one, flag])` groups at
/// C/D/E and G/H/I.
fn write_two_column_sheet(
    workbook: &mut Workbook,
    name: &str,
    header_row: u32,
    rows: &[(u32, [&str; 3], [&str; 3])],
) {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(name).expect("sheet named");
    let headers = [
        (2, "Name"),
        (3, "+1"),
        (4, "Pre-wed"),
        (6, "Name"),
        (7, "+1"),
        (8, "Pre-wed"),
    ];
    for (col, header) in headers {
        worksheet
            .write_string(header_row, col, header)
            .expect("header written");
    }
    for (row, left, right) in rows {
        for (offset, (left_cell, right_cell)) in left.iter().zip(right).enumerate() {
            let offset = offset as u16;
            write_cell(worksheet, *row, 2 + offset, left_cell);
            write_cell(worksheet, *row, 6 + offset, right_cell);
        }
    }
}

fn write_cell(worksheet: &mut rust_xlsxwriter::Worksheet, row: u32, col: u16, value: &str) {
    if value.is_empty() {
        return;
    }
    match value.parse::<f64>() {
        Ok(number) => worksheet.write_number(row, col, number),
        Err(_) => worksheet.write_string(row, col, value),
    }
    .expect("cell written");
}

fn write_parents_sheet(workbook: &mut Workbook, rows: &[(&str, &str)]) {
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Parents 1").expect("sheet named");
    worksheet.write_string(0, 1, "Count").expect("header written");
    worksheet.write_string(0, 2, "Name").expect("header written");
    for (index, (count, name)) in rows.iter().enumerate() {
        let row = index as u32 + 1;
        write_cell(worksheet, row, 1, count);
        write_cell(worksheet, row, 2, name);
    }
}

fn write_guest_workbook(path: &Path) {
    let mut workbook = Workbook::new();
    write_two_column_sheet(
        &mut workbook,
        "Corine",
        2,
        &[
            (4, ["Jane Doe", "1", "y"], ["John Smith", "0", "N"]),
            (5, ["Total", "5", ""], ["Madonna", "", "n"]),
            (6, ["  ", "1", "Y"], ["Bob Brown", "abc", "Y"]),
        ],
    );
    write_two_column_sheet(
        &mut workbook,
        "Isaac",
        1,
        &[(3, ["john smith", "2", "Y"], ["Alice Green", "1", "n"])],
    );
    write_parents_sheet(
        &mut workbook,
        &[
            ("", "Smith Family"),
            ("4", "Jones Family"),
            ("0", "Lee Family"),
            ("", "Jane Doe"),
        ],
    );
    workbook.save(path).expect("workbook saved");
}

fn config_for(dir: &Path) -> ConvertConfig {
    ConvertConfig {
        input: dir.join("guests.xlsx"),
        output: dir.join("data").join("guests.json"),
        ..ConvertConfig::default()
    }
}

#[test]
fn workbook_converts_to_guest_list() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());
    write_guest_workbook(&config.input);

    let guests = convert_workbook(&config).expect("workbook converted");

    let summary: Vec<(u32, &str, bool, bool, u32)> = guests
        .iter()
        .map(|guest| {
            (
                guest.id,
                guest.name.as_str(),
                guest.plus_one_allowed,
                guest.pre_wedding_invited,
                guest.headcount,
            )
        })
        .collect();
    assert_eq!(
        summary,
        [
            (1, "Jane Doe", true, true, 2),
            (2, "John Smith", false, false, 1),
            (3, "Madonna", false, false, 1),
            (4, "Bob Brown", false, true, 1),
            (5, "Alice Green", true, false, 2),
            (6, "Smith Family", false, true, 2),
            (7, "Jones Family", false, true, 4),
            (8, "Lee Family", false, true, 2),
        ]
    );

    let written = fs::read_to_string(&config.output).expect("guest list read");
    let restored: Vec<GuestRecord> = serde_json::from_str(&written).expect("guest list parsed");
    assert_eq!(restored, guests);
    assert_eq!(restored[1].first_name_metaphone, "JN");
    assert_eq!(restored[1].last_name_metaphone, "SM0");
    assert_eq!(restored[2].last_name_metaphone, "");
}

#[test]
fn guest_list_fields_keep_published_order() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());
    write_guest_workbook(&config.input);

    convert_workbook(&config).expect("workbook converted");

    let written = fs::read_to_string(&config.output).expect("guest list read");
    let expected_head = concat!(
        "[\n",
        "  {\n",
        "    \"id\": 1,\n",
        "    \"name\": \"Jane Doe\",\n",
        "    \"name_lower\": \"jane doe\",\n",
        "    \"first_name_metaphone\": \"JN\",\n",
        "    \"last_name_metaphone\": \"T\",\n",
        "    \"plus_one_allowed\": true,\n",
        "    \"pre_wedding_invited\": true,\n",
        "    \"headcount\": 2\n",
        "  },\n",
    );
    assert!(written.starts_with(expected_head), "unexpected output:\n{written}");
}

#[test]
fn rerun_overwrites_with_identical_output() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());
    write_guest_workbook(&config.input);
    fs::create_dir_all(config.output.parent().expect("output directory"))
        .expect("output directory created");
    fs::write(&config.output, "stale".repeat(10_000)).expect("stale output written");

    convert_workbook(&config).expect("first run");
    let first = fs::read(&config.output).expect("first output read");
    convert_workbook(&config).expect("second run");
    let second = fs::read(&config.output).expect("second output read");

    assert_eq!(first, second);
    assert!(!String::from_utf8_lossy(&first).contains("stale"));
}

#[test]
fn absent_sheets_contribute_nothing() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());
    let mut workbook = Workbook::new();
    write_parents_sheet(&mut workbook, &[("3", "Ng Family")]);
    workbook.save(&config.input).expect("workbook saved");

    let guests = convert_workbook(&config).expect("workbook converted");

    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].name, "Ng Family");
    assert_eq!(guests[0].headcount, 3);
}

#[test]
fn missing_workbook_leaves_no_output() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());

    let error = convert_workbook(&config).expect_err("missing input rejected");

    assert!(matches!(error, GuestError::MissingInput(path) if path == config.input));
    assert!(!config.output.exists());
}

#[test]
fn malformed_workbook_leaves_no_output() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());
    fs::write(&config.input, "not a workbook").expect("bogus input written");

    let error = convert_workbook(&config).expect_err("malformed input rejected");

    assert!(matches!(error, GuestError::ExcelRead(_)));
    assert!(!config.output.exists());
}

#[test]
fn narrow_sheet_keeps_left_guests() {
    let temp_dir = tempdir().expect("temporary directory");
    let config = config_for(temp_dir.path());
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Isaac").expect("sheet named");
    worksheet.write_string(1, 2, "Name").expect("header written");
    worksheet.write_string(1, 3, "+1").expect("header written");
    write_cell(worksheet, 3, 2, "Ann Lee");
    write_cell(worksheet, 3, 3, "1");
    write_cell(worksheet, 4, 2, "Ben Ray");
    workbook.save(&config.input).expect("workbook saved");

    let guests = convert_workbook(&config).expect("workbook converted");

    let summary: Vec<(&str, bool, u32)> = guests
        .iter()
        .map(|guest| (guest.name.as_str(), guest.pre_wedding_invited, guest.headcount))
        .collect();
    assert_eq!(summary, [("Ann Lee", false, 2), ("Ben Ray", false, 1)]);
}
