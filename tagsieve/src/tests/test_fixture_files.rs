#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::path::Path;

use crate::{NameSet, Sanitizer, SanitizerConfig};

#[derive(Debug)]
struct TestCase {
    name: String,
    config: SanitizerConfig,
    input: String,
    expected: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Start,
    Name,
    Config,
    Input,
    Expected,
}

fn parse_config_line(config: &mut SanitizerConfig, line: &str) -> Result<(), String> {
    let (key, list) = line
        .split_once(':')
        .ok_or_else(|| format!("bad config line {:?}", line))?;
    match key.trim() {
        "tags" => {
            config.allowed_tags = Some(NameSet::parse_tags(list).map_err(|e| e.to_string())?);
        }
        "attributes" => {
            config.allowed_attributes =
                Some(NameSet::parse_attributes(list).map_err(|e| e.to_string())?);
        }
        other => return Err(format!("unknown config key {:?}", other)),
    }
    Ok(())
}

fn parse_test_file(content: &str) -> Result<TestCase, String> {
    let mut section = Section::Start;
    let mut name = String::new();
    let mut config = SanitizerConfig::allow_all();
    let mut input: Vec<&str> = Vec::new();
    let mut expected: Vec<&str> = Vec::new();

    for line in content.lines() {
        match line {
            "--TEST--" => section = Section::Name,
            "--CONFIG--" => section = Section::Config,
            "--INPUT--" => section = Section::Input,
            "--EXPECTED--" => section = Section::Expected,
            _ => match section {
                Section::Start => {}
                Section::Name => {
                    if !line.is_empty() {
                        name.push_str(line);
                    }
                }
                Section::Config => {
                    if !line.trim().is_empty() {
                        parse_config_line(&mut config, line)?;
                    }
                }
                Section::Input => input.push(line),
                Section::Expected => {
                    if !line.is_empty() {
                        expected.push(line);
                    }
                }
            },
        }
    }

    if section != Section::Expected {
        return Err("missing --EXPECTED-- section".to_string());
    }

    Ok(TestCase {
        name,
        config,
        input: input.join("\n"),
        expected: expected.join("\n"),
    })
}

fn run_single_fixture(file_path: &Path) -> Result<(), String> {
    let content = fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read file {:?}: {}", file_path, e))?;

    let test_case = parse_test_file(&content)
        .map_err(|e| format!("Failed to parse test file {:?}: {}", file_path, e))?;

    let mut sanitizer = Sanitizer::new(test_case.config.clone());
    sanitizer.sanitize(&test_case.input);

    if sanitizer.result() != test_case.expected {
        return Err(format!(
            "Test failed for {:?}\nTest: {}\nInput: {:?}\nExpected: {:?}\nActual: {:?}",
            file_path,
            test_case.name,
            test_case.input,
            test_case.expected,
            sanitizer.result()
        ));
    }

    Ok(())
}

#[test]
fn test_all_fixture_files() {
    let test_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata");
    let entries = fs::read_dir(&test_dir).expect("Failed to read testdata directory");

    let mut test_files: Vec<_> = entries
        .map(|entry| entry.expect("Failed to read directory entry").path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .map_or(false, |n| n.starts_with("test-") && n.ends_with(".txt"))
        })
        .collect();
    test_files.sort();

    assert!(!test_files.is_empty(), "no fixtures found in {:?}", test_dir);

    let failures: Vec<String> = test_files
        .iter()
        .filter_map(|path| run_single_fixture(path).err())
        .collect();

    if !failures.is_empty() {
        for failure in &failures {
            println!("{}", failure);
        }
        panic!("{} of {} fixture(s) failed", failures.len(), test_files.len());
    }
}

#[test]
fn test_parse_test_file() {
    let case = parse_test_file(
        "--TEST--\nsample\n--CONFIG--\ntags: p\nattributes:\n--INPUT--\n<p>a</p>\n--EXPECTED--\n<p>a</p>\n",
    )
    .unwrap();
    assert_eq!(case.name, "sample");
    assert_eq!(case.input, "<p>a</p>");
    assert_eq!(case.expected, "<p>a</p>");
    assert_eq!(case.config.allowed_attributes, Some(NameSet::new()));
    assert!(case.config.is_allowed_tag("p"));
}
