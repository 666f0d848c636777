// Copyright (C) Brian G. Milnes 2025

//! Tests for the format entry point: placement, preservation and idempotence

mod common;

use anyhow::Result;
use common::*;
use usingfmt::{format, format_text, FormatConfig, SortGroup, SortStandard, Span};

fn inside() -> FormatConfig {
    FormatConfig {
        place_inside_namespace: true,
        ..FormatConfig::default()
    }
}

fn grouped() -> FormatConfig {
    FormatConfig {
        primary_sort: SortStandard::Alphabet,
        sort_groups: vec![
            SortGroup::new("System", &["System", "Microsoft"]),
            SortGroup::new("Local", &["MyApp", "App"]),
        ],
        blank_line_between_groups: true,
        ..FormatConfig::default()
    }
}

fn all_configs() -> Vec<FormatConfig> {
    vec![
        FormatConfig::default(),
        alphabetical(),
        inside(),
        grouped(),
        FormatConfig {
            place_inside_namespace: true,
            primary_sort: SortStandard::SegmentCount,
            secondary_sort: SortStandard::Alphabet,
            trailing_blank_line: false,
            ..FormatConfig::default()
        },
    ]
}

#[test]
fn test_sorts_file_without_namespace() -> Result<()> {
    let source = "using System.Linq;\nusing System;\nusing A.B;\n\nclass C {}\n";
    let result = reformat(source, &FormatConfig::default())?;
    assert_eq!(result, "using A.B;\nusing System;\nusing System.Linq;\n\nclass C {}\n");
    Ok(())
}

#[test]
fn test_single_edit_shape() -> Result<()> {
    let source = "using System.Linq;\nusing System;\nusing A.B;\n\nclass C {}\n";
    let edit = format(source, &FormatConfig::default())?.expect("directives present");

    assert_eq!(edit.insertion.offset, 0);
    assert_eq!(edit.deletions, vec![Span::new(0, 45)]);
    assert_eq!(edit.insertion.text, "using A.B;\nusing System;\nusing System.Linq;\n\n");
    Ok(())
}

#[test]
fn test_outside_placement_keeps_header() -> Result<()> {
    let source = "// Copyright\n\nusing System.Text;\nusing System;\n\nnamespace App\n{\n    class C {}\n}\n";
    let result = reformat(source, &FormatConfig::default())?;
    assert_eq!(
        result,
        "// Copyright\n\nusing System;\nusing System.Text;\n\nnamespace App\n{\n    class C {}\n}\n"
    );
    Ok(())
}

#[test]
fn test_inside_placement_moves_into_body() -> Result<()> {
    let source = "// Copyright\n\nusing System.Text;\nusing System;\n\nnamespace App\n{\n    class C {}\n}\n";
    let result = reformat(source, &inside())?;
    assert_eq!(
        result,
        "// Copyright\n\nnamespace App\n{\n    using System;\n    using System.Text;\n\n    class C {}\n}\n"
    );
    Ok(())
}

#[test]
fn test_directives_on_both_sides_of_namespace() -> Result<()> {
    let source = "using System;\n\nnamespace App\n{\n    using App.Models;\n\n    public class C {}\n}\n";

    assert_eq!(
        reformat(source, &inside())?,
        "namespace App\n{\n    using System;\n    using App.Models;\n\n    public class C {}\n}\n"
    );
    assert_eq!(
        reformat(source, &FormatConfig::default())?,
        "using System;\nusing App.Models;\n\nnamespace App\n{\n    public class C {}\n}\n"
    );
    Ok(())
}

#[test]
fn test_file_scoped_namespace() -> Result<()> {
    let source = "namespace App;\n\nusing B;\nusing A;\n\npublic class C {}\n";

    assert_eq!(
        reformat(source, &FormatConfig { place_inside_namespace: true, ..alphabetical() })?,
        "namespace App;\n\nusing A;\nusing B;\n\npublic class C {}\n"
    );
    assert_eq!(
        reformat(source, &alphabetical())?,
        "using A;\nusing B;\n\nnamespace App;\n\npublic class C {}\n"
    );
    Ok(())
}

#[test]
fn test_already_formatted_is_unchanged() -> Result<()> {
    let source = "using B;\n\n// The app\nnamespace App\n{\n}\n";
    assert!(format(source, &FormatConfig::default())?.is_some());
    assert_eq!(reformat(source, &FormatConfig::default())?, source);
    Ok(())
}

#[test]
fn test_comment_travels_with_its_directive() -> Result<()> {
    let source = "using Zed.Long.Name;\n// for A\nusing A;\n\nclass C {}\n";
    let result = reformat(source, &FormatConfig::default())?;
    assert_eq!(result, "// for A\nusing A;\nusing Zed.Long.Name;\n\nclass C {}\n");
    Ok(())
}

#[test]
fn test_comment_before_code_is_preserved() -> Result<()> {
    let source = "using B;\nusing A;\n\n// Entry point\nclass Program {}\n";
    let result = reformat(source, &alphabetical())?;
    assert_eq!(result, "using A;\nusing B;\n\n// Entry point\nclass Program {}\n");
    Ok(())
}

#[test]
fn test_only_directives_gets_no_trailing_blank() -> Result<()> {
    let result = reformat("using B;\nusing A;\n", &alphabetical())?;
    assert_eq!(result, "using A;\nusing B;\n");
    Ok(())
}

#[test]
fn test_trailing_blank_line_can_be_disabled() -> Result<()> {
    let config = FormatConfig {
        trailing_blank_line: false,
        ..alphabetical()
    };
    let result = reformat("using B;\nusing A;\n\nclass C {}\n", &config)?;
    assert_eq!(result, "using A;\nusing B;\nclass C {}\n");
    Ok(())
}

#[test]
fn test_crlf_is_preserved() -> Result<()> {
    let source = "using B;\r\nusing A;\r\n\r\nclass C {}\r\n";
    let result = reformat(source, &alphabetical())?;
    assert_eq!(result, "using A;\r\nusing B;\r\n\r\nclass C {}\r\n");
    Ok(())
}

#[test]
fn test_multi_line_directives_are_joined() -> Result<()> {
    let result = reformat("using Foo =\n    Bar.Baz;\nusing A;\nclass C {}\n", &FormatConfig::default())?;
    assert_eq!(result, "using A;\nusing Foo = Bar.Baz;\n\nclass C {}\n");

    let result = reformat("using B\n;\nusing A;\nclass C {}\n", &alphabetical())?;
    assert_eq!(result, "using A;\nusing B;\n\nclass C {}\n");
    Ok(())
}

#[test]
fn test_trailing_comment_does_not_swallow_code() -> Result<()> {
    let result = reformat("using B;\nusing A; // why\npublic class C\n{\n}\n", &alphabetical())?;
    assert_eq!(result, "using A; // why\nusing B;\n\npublic class C\n{\n}\n");

    let result = reformat("using Zed;\nusing A; // note\n[assembly: Foo]\nnamespace X\n{\n}\n", &alphabetical())?;
    assert_eq!(result, "using A; // note\nusing Zed;\n\n[assembly: Foo]\nnamespace X\n{\n}\n");
    Ok(())
}

#[test]
fn test_unfinished_directive_is_not_touched() -> Result<()> {
    assert_eq!(format("using B;\nusing A\npublic class C {}\n", &FormatConfig::default())?, None);
    Ok(())
}

#[test]
fn test_lone_semicolon_between_directives() -> Result<()> {
    let result = reformat("using B;\n;\nusing A;\nclass C {}\n", &alphabetical())?;
    assert_eq!(result, "using A;\nusing B;\n\nclass C {}\n");
    Ok(())
}

#[test]
fn test_inside_placement_directly_after_brace() -> Result<()> {
    let source = "using A;\nnamespace X\n{\n\n    class C {}\n}\n";
    let once = reformat(source, &inside())?;
    assert_eq!(once, "namespace X\n{\n    using A;\n\n    class C {}\n}\n");
    assert_eq!(reformat(&once, &inside())?, once);

    let commented = "using A;\nnamespace X\n{\n\n    // The class\n    class C {}\n}\n";
    assert_eq!(
        reformat(commented, &inside())?,
        "namespace X\n{\n    using A;\n\n    // The class\n    class C {}\n}\n"
    );
    Ok(())
}

#[test]
fn test_groups_with_blank_lines() -> Result<()> {
    let source = "using MyApp;\nusing System.IO;\nusing Newtonsoft.Json;\n\nclass C {}\n";
    let result = reformat(source, &grouped())?;
    assert_eq!(
        result,
        "using System.IO;\n\nusing MyApp;\n\nusing Newtonsoft.Json;\n\nclass C {}\n"
    );
    Ok(())
}

#[test]
fn test_nothing_to_do() -> Result<()> {
    let config = FormatConfig::default();
    assert_eq!(format("", &config)?, None);
    assert_eq!(format("// just a comment\n", &config)?, None);
    assert_eq!(format("class C {}\n", &config)?, None);
    assert_eq!(format_text("namespace App\n{\n}\n", &config)?, None);
    Ok(())
}

#[test]
fn test_bad_groups_fail_before_scanning() {
    let config = FormatConfig {
        sort_groups: vec![SortGroup::new("Broken", &["re:[unclosed"])],
        ..FormatConfig::default()
    };
    // Fails even for a document with nothing to format
    assert!(format("", &config).is_err());
    assert!(format("using A;\n", &config).is_err());
}

#[test]
fn test_formatting_is_idempotent() -> Result<()> {
    for config in all_configs() {
        for source in sample_sources() {
            let once = reformat(source, &config)?;
            let twice = reformat(&once, &config)?;
            assert_eq!(once, twice, "not idempotent for {source:?} with {config:?}");
        }
    }
    Ok(())
}

#[test]
fn test_directives_are_preserved() -> Result<()> {
    for config in all_configs() {
        for source in sample_sources() {
            let result = reformat(source, &config)?;
            assert_eq!(
                directive_multiset(&result),
                directive_multiset(source),
                "directives changed for {source:?} with {config:?}"
            );
        }
    }
    Ok(())
}

#[test]
fn test_non_directive_lines_are_preserved() -> Result<()> {
    for config in all_configs() {
        for source in sample_sources() {
            let result = reformat(source, &config)?;
            let code = |text: &str| -> Vec<String> {
                text.lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with("using "))
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            };
            let mut before = code(source);
            let mut after = code(&result);
            before.sort();
            after.sort();
            assert_eq!(before, after, "lines lost for {source:?} with {config:?}");
        }
    }
    Ok(())
}
