//! Unit tests for the country lookup CLI helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use rstest::{fixture, rstest};

use super::test_support::{open_dataset_dir, unique_temp_path};
use super::*;
use crate::category::Category;

struct DatasetFixture {
    path: Utf8PathBuf,
}

impl DatasetFixture {
    fn path(&self) -> Utf8PathBuf {
        self.path.clone()
    }
}

impl Drop for DatasetFixture {
    fn drop(&mut self) {
        cleanup_path(&self.path);
    }
}

const VALID_JSON: &str = r#"{
    "version": 1,
    "countries": [
        {"name": "Freedonia", "twoLetter": "FD", "threeLetter": "FRD", "numeric": 901},
        {"name": "Sylvania", "twoLetter": "SY", "threeLetter": "SYL", "numeric": 902, "category": "old"}
    ]
}"#;

#[fixture]
fn dataset_fixture() -> DatasetFixture {
    DatasetFixture {
        path: write_dataset(VALID_JSON),
    }
}

fn options_for(args: &[&str]) -> Options {
    let owned = args.iter().map(|arg| (*arg).to_owned());
    let ParseOutcome::Options(options) = parse_args(owned).expect("parse args") else {
        panic!("expected options");
    };
    options
}

#[rstest]
#[case("--help")]
#[case("-h")]
fn parse_args_returns_help_for_help_flag(#[case] flag: &str) {
    let args = vec!["de".to_owned(), flag.to_owned()];

    let outcome = parse_args(args.into_iter()).expect("parse args");

    assert!(matches!(outcome, ParseOutcome::Help));
}

#[test]
fn parse_args_requires_a_key() {
    let args = vec!["--json".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingKeys);
}

#[rstest]
#[case("--mask")]
#[case("--data")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let args = vec!["de".to_owned(), flag.to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let args = vec!["de".to_owned(), "--nope".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--nope".to_owned(),
        }
    );
}

#[test]
fn parse_args_reports_invalid_mask() {
    let args = vec!["--mask".to_owned(), "planet".to_owned(), "de".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    let CliError::InvalidMask { value, .. } = err else {
        panic!("expected invalid mask error");
    };
    assert_eq!(value, "planet");
}

#[test]
fn parse_args_rejects_zero_mask() {
    let args = vec!["--mask".to_owned(), "0".to_owned(), "de".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert!(matches!(err, CliError::InvalidMask { .. }));
}

#[test]
fn parse_args_parses_full_options() {
    let options = options_for(&[
        "--mask",
        "regular,old",
        "--data",
        "countries.json",
        "--json",
        "de",
        "--",
        "-1",
        "--json",
    ]);

    assert_eq!(options.keys(), ["de", "-1", "--json"]);
    assert_eq!(options.mask(), CategoryMask::REGULAR | CategoryMask::OLD);
    assert_eq!(options.data_path(), Some(Utf8Path::new("countries.json")));
    assert!(options.json());
}

#[test]
fn parse_args_defaults_to_any_mask_and_text_output() {
    let options = options_for(&["us"]);

    assert_eq!(options.mask(), CategoryMask::ANY);
    assert_eq!(options.data_path(), None);
    assert!(!options.json());
}

#[test]
fn load_registry_borrows_builtin_without_data_path() {
    let options = options_for(&["de"]);

    let registry = load_registry(&options).expect("load registry");

    assert!(matches!(registry, Cow::Borrowed(_)));
    assert_eq!(registry.country_name("DE", CategoryMask::ANY), Ok(Some("Germany")));
}

#[rstest]
fn load_registry_reads_dataset_file(dataset_fixture: DatasetFixture) {
    let path = dataset_fixture.path();
    let options = options_for(&["--data", path.as_str(), "fd"]);

    let registry = load_registry(&options).expect("load registry");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.country_name(901, CategoryMask::ANY), Ok(Some("Freedonia")));
    assert_eq!(registry.find("DE", CategoryMask::ANY), Ok(None));
}

#[test]
fn load_registry_reports_missing_file() {
    let path = unique_temp_path("lookup-cli", "missing.json").expect("temp path");
    let options = options_for(&["--data", path.as_str(), "de"]);

    let err = load_registry(&options).expect_err("expected error");

    let CliError::RegistryError { source } = err else {
        panic!("expected registry error");
    };
    let RegistryError::IoError { path: err_path, .. } = source else {
        panic!("expected IO error");
    };
    assert_eq!(err_path, path);
    assert!(
        err_path.as_str().contains("country-registry-tests"),
        "path should keep the dataset directory: {err_path}"
    );

    cleanup_path(&path);
}

#[test]
fn load_registry_reports_missing_directory() {
    let path = unique_missing_path("countries.json");
    let options = options_for(&["--data", path.as_str(), "de"]);

    let err = load_registry(&options).expect_err("expected error");

    let CliError::RegistryError { source } = err else {
        panic!("expected registry error");
    };
    match source {
        RegistryError::IoError {
            path: err_path,
            message,
        } => {
            assert_eq!(err_path, path);
            assert!(!message.is_empty());
        }
        other => panic!("expected IO error, got {other:?}"),
    }
}

#[test]
fn load_registry_reports_parse_errors() {
    let path = write_dataset("not json");
    let options = options_for(&["--data", path.as_str(), "de"]);

    let err = load_registry(&options).expect_err("expected error");

    assert!(matches!(
        err,
        CliError::RegistryError {
            source: RegistryError::ParseError { .. }
        }
    ));

    cleanup_path(&path);
}

#[test]
fn resolve_keys_applies_mask_per_key() {
    let options = options_for(&["--mask", "regular", "DE", "2", "BUR"]);

    let outcomes = resolve_keys(&CountryRegistry::builtin(), &options).expect("resolve");

    let found: Vec<_> = outcomes.iter().map(LookupOutcome::is_found).collect();
    assert_eq!(found, [true, false, false]);
}

#[test]
fn format_outcome_renders_text_line() {
    let registry = CountryRegistry::builtin();
    let outcome = LookupOutcome {
        key: "at".to_owned(),
        country: registry.find_any("at").cloned(),
    };

    let line = format_outcome(&outcome, false).expect("format");

    assert_eq!(line, "at: Austria (AT/AUT/040, regular)");
}

#[test]
fn format_outcome_marks_absent_codes() {
    let registry = CountryRegistry::builtin();
    let outcome = LookupOutcome {
        key: "150".to_owned(),
        country: registry.find_any(150).cloned(),
    };

    let line = format_outcome(&outcome, false).expect("format");

    assert_eq!(line, "150: Europe (-/-/150, region)");
}

#[test]
fn format_outcome_renders_json_line() {
    let registry = CountryRegistry::builtin();
    let outcome = LookupOutcome {
        key: "bu".to_owned(),
        country: registry.find_any("bu").cloned(),
    };

    let line = format_outcome(&outcome, true).expect("format");

    assert_eq!(
        line,
        r#"{"key":"bu","country":{"name":"Burma","twoLetter":"BU","threeLetter":"BUR","numeric":104,"category":"old"}}"#
    );
    assert_eq!(
        outcome.country.map(|country| country.category()),
        Some(Category::Old)
    );
}

#[test]
fn format_outcome_renders_null_for_missing_json() {
    let outcome = LookupOutcome {
        key: "xx".to_owned(),
        country: None,
    };

    let line = format_outcome(&outcome, true).expect("format");

    assert_eq!(line, r#"{"key":"xx","country":null}"#);
}

fn write_dataset(json: &str) -> Utf8PathBuf {
    let path = unique_temp_path("lookup-cli", "countries.json").expect("temp path");
    let dir = open_dataset_dir(&path).expect("open dataset dir");
    let file_name = path.file_name().expect("dataset file name");
    dir.write(file_name, json).expect("write dataset");
    path
}

fn cleanup_path(path: &Utf8Path) {
    if let Some(parent) = path.parent() {
        let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
        drop(root.remove_dir_all(parent));
    }
}

fn unique_missing_path(file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir_name = format!("lookup-cli-missing-{counter}");
    Utf8PathBuf::from("target")
        .join("country-registry-tests")
        .join(dir_name)
        .join(file_name)
}
