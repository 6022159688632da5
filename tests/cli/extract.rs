use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::CliTest;

const INDEX: &str = r#"{
    "kind": "other", "name": "template", "line": 1,
    "children": [
        { "kind": "function_call", "name": "_", "line": 3,
          "arguments": [{ "kind": "literal", "value": "Hello", "line": 3 }] },
        { "kind": "other", "name": "block", "line": 5, "children": [
            { "kind": "function_call", "name": "_n", "line": 12,
              "arguments": [
                  { "kind": "literal", "value": "apple", "line": 12 },
                  { "kind": "literal", "value": "apples", "line": 12 },
                  { "kind": "other", "name": "count", "line": 12 }
              ] }
        ] },
        { "kind": "function_call", "name": "format", "line": 14,
          "arguments": [{ "kind": "literal", "value": "ignored", "line": 14 }] }
    ]
}"#;

const MALFORMED: &str = r#"{
    "kind": "other", "name": "template", "line": 1,
    "children": [
        { "kind": "function_call", "name": "__", "line": 2,
          "arguments": [{ "kind": "other", "name": "variable", "line": 2 }] },
        { "kind": "function_call", "name": "_", "line": 4,
          "arguments": [{ "kind": "literal", "value": "Kept", "line": 4 }] }
    ]
}"#;

#[test]
fn test_extract_human_output() -> Result<()> {
    let test = CliTest::with_file("templates/index.ast.json", INDEX)?;

    assert_cmd_snapshot!(test.extract_command());

    Ok(())
}

#[test]
fn test_extract_json_output() -> Result<()> {
    let test = CliTest::with_file("templates/index.ast.json", INDEX)?;

    assert_cmd_snapshot!(test.extract_command().args(["--format", "json"]));

    Ok(())
}

#[test]
fn test_extract_skips_malformed_call() -> Result<()> {
    let test = CliTest::with_file("templates/bad.ast.json", MALFORMED)?;

    assert_cmd_snapshot!(test.extract_command());

    Ok(())
}

#[test]
fn test_extract_abort_drops_template() -> Result<()> {
    let test = CliTest::with_file("templates/bad.ast.json", MALFORMED)?;

    assert_cmd_snapshot!(test.extract_command().args(["--on-error", "abort"]));

    Ok(())
}

#[test]
fn test_extract_policy_from_config() -> Result<()> {
    let test = CliTest::with_file("views/bad.ast.json", MALFORMED)?;
    test.write_file(
        ".gettextscanrc.json",
        r#"{ "includes": ["views"], "onError": "abort" }"#,
    )?;

    assert_cmd_snapshot!(test.extract_command());

    Ok(())
}

#[test]
fn test_extract_explicit_paths_and_ignores() -> Result<()> {
    let test = CliTest::with_file("a/one.ast.json", INDEX)?;
    test.write_file("b/two.ast.json", INDEX)?;
    test.write_file("a/generated/three.ast.json", INDEX)?;
    test.write_file("a/readme.json", "not a tree")?;
    test.write_file(".gettextscanrc.json", r#"{ "ignores": ["**/generated/**"] }"#)?;

    assert_cmd_snapshot!(test.extract_command().arg("a"));

    Ok(())
}

#[test]
fn test_extract_relative_glob_ignore() -> Result<()> {
    let test = CliTest::with_file("templates/page.ast.json", INDEX)?;
    test.write_file("templates/cache/old.ast.json", INDEX)?;
    test.write_file(
        ".gettextscanrc.json",
        r#"{ "ignores": ["templates/cache/*"] }"#,
    )?;

    assert_cmd_snapshot!(test.extract_command());

    Ok(())
}

#[test]
fn test_extract_reports_parse_error() -> Result<()> {
    let test = CliTest::with_file("templates/broken.ast.json", "{ not json")?;
    test.write_file("templates/ok.ast.json", INDEX)?;

    insta::with_settings!({filters => vec![
        (r"(Failed to parse syntax tree: \S+): .*  parse-error", "${1}: [PARSE ERROR]  parse-error"),
    ]}, {
        assert_cmd_snapshot!(test.extract_command());
    });

    Ok(())
}

#[test]
fn test_extract_invalid_config_is_internal_error() -> Result<()> {
    let test = CliTest::with_file(".gettextscanrc.json", "{ nope")?;

    insta::with_settings!({filters => vec![
        (r#"config file: "\S*\.gettextscanrc\.json": .*"#, "config file: [CONFIG]: [PARSE ERROR]"),
    ]}, {
        assert_cmd_snapshot!(test.extract_command());
    });

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("extract"));
    assert!(stdout.contains("init"));

    Ok(())
}
