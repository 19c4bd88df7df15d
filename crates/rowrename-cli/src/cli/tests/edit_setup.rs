use super::*;
use std::path::PathBuf;

#[test]
fn cli_parse_setup() {
    match parse(&["rowrename", "setup", "uploads.csv"]) {
        CliCommand::Setup { csv } => assert_eq!(csv, PathBuf::from("uploads.csv")),
        _ => panic!("expected Setup"),
    }
}

#[test]
fn cli_parse_edit() {
    match parse(&["rowrename", "edit", "s.csv", "--row", "2", "--column", "3", "Yes"]) {
        CliCommand::Edit {
            csv,
            row,
            column,
            value,
            sheet,
            files,
        } => {
            assert_eq!(csv, PathBuf::from("s.csv"));
            assert_eq!(row, 2);
            assert_eq!(column, 3);
            assert_eq!(value, "Yes");
            assert!(sheet.is_none());
            assert!(files.is_none());
        }
        _ => panic!("expected Edit"),
    }
}

#[test]
fn cli_parse_edit_with_sheet_and_files() {
    match parse(&[
        "rowrename", "edit", "s.csv", "--row", "5", "--column", "2", "--sheet", "Sheet1", "--files",
        "/srv/files", "vacation",
    ]) {
        CliCommand::Edit {
            value, sheet, files, ..
        } => {
            assert_eq!(value, "vacation");
            assert_eq!(sheet.as_deref(), Some("Sheet1"));
            assert_eq!(files, Some(PathBuf::from("/srv/files")));
        }
        _ => panic!("expected Edit"),
    }
}

#[test]
fn cli_parse_edit_empty_value_clears() {
    match parse(&["rowrename", "edit", "s.csv", "--row", "2", "--column", "3", ""]) {
        CliCommand::Edit { value, .. } => assert_eq!(value, ""),
        _ => panic!("expected Edit"),
    }
}

#[test]
fn cli_parse_edit_requires_row_and_column() {
    assert!(Cli::try_parse_from(["rowrename", "edit", "s.csv", "Yes"]).is_err());
    assert!(Cli::try_parse_from(["rowrename", "edit", "s.csv", "--row", "x", "--column", "3", "Yes"]).is_err());
}
