use super::{fold_subsections, parse_heading, parse_sections, scan_sections, Section};

fn titles(sections: &[Section]) -> Vec<&str> {
    sections.iter().map(|s| s.title.as_str()).collect()
}

#[test]
fn test_flat_headings_in_document_order() {
    let sections = parse_sections("# One\na\n# Two\nb\n# Three\nc");

    assert_eq!(titles(&sections), vec!["One", "Two", "Three"]);
    assert_eq!(sections[0].content, "a\n");
    assert_eq!(sections[2].content, "c\n");
    assert!(sections.iter().all(|s| s.level == 1));
}

#[test]
fn test_subsection_folds_into_parent() {
    let sections = parse_sections("# A\ntext1\n## B\ntext2\n# C\ntext3\n");

    assert_eq!(titles(&sections), vec!["A", "C"]);
    assert_eq!(sections[0].content, "text1\n\nB\ntext2\n");
    // The trailing newline of the document yields a final empty line.
    assert_eq!(sections[1].content, "text3\n\n");
    assert_eq!(sections[1].content.trim(), "text3");
}

#[test]
fn test_siblings_are_never_merged() {
    let sections = parse_sections("## A\nx\n## B\ny\n");

    assert_eq!(titles(&sections), vec!["A", "B"]);
    assert_eq!(sections[0].content, "x\n");
    assert_eq!(sections[1].content, "y\n\n");
}

#[test]
fn test_multi_level_nesting_folds_in_one_pass() {
    let sections = parse_sections("# A\n## B\n### C\nc\n## D\nd");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].title, "A");
    assert_eq!(sections[0].content, "\nB\n\nC\nc\n\nD\nd\n");
}

#[test]
fn test_skipped_levels_still_fold() {
    let sections = parse_sections("# A\n### Deep\ndeep\n## Mid\nmid");

    assert_eq!(titles(&sections), vec!["A"]);
    assert_eq!(sections[0].content, "\nDeep\ndeep\n\nMid\nmid\n");
}

#[test]
fn test_shallower_heading_after_deeper_is_not_absorbed() {
    let sections = parse_sections("## A\na\n# B\nb");

    assert_eq!(titles(&sections), vec!["A", "B"]);
    assert_eq!(sections[0].level, 2);
    assert_eq!(sections[1].level, 1);
}

#[test]
fn test_text_before_first_heading_is_discarded() {
    let sections = parse_sections("preamble\nmore\n# A\nbody");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].content, "body\n");
}

#[test]
fn test_document_without_headings_has_no_sections() {
    assert!(parse_sections("just some\ntext\n").is_empty());
    assert!(parse_sections("").is_empty());
}

#[test]
fn test_malformed_headings_are_body_text() {
    let sections = parse_sections("# Real\n#NoSpace\n#\n#   \nbody");

    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].content, "#NoSpace\n#\n#   \nbody\n");
}

#[test]
fn test_heading_detection() {
    assert_eq!(parse_heading("# Title"), Some((1, "Title")));
    assert_eq!(parse_heading("###   Spaced out   "), Some((3, "Spaced out")));
    assert_eq!(parse_heading("#\tTabbed"), Some((1, "Tabbed")));
    assert_eq!(parse_heading("####### Seven"), Some((7, "Seven")));
    assert_eq!(parse_heading("#hashtag"), None);
    assert_eq!(parse_heading("## "), None);
    assert_eq!(parse_heading(" # indented"), None);
    assert_eq!(parse_heading("plain"), None);
}

#[test]
fn test_scan_keeps_nested_sections_flat() {
    let flat = scan_sections("# A\na\n## B\nb\n");

    assert_eq!(titles(&flat), vec!["A", "B"]);
    assert_eq!(flat[1].level, 2);
    assert_eq!(flat[0].content, "a\n");
}

#[test]
fn test_fold_is_idempotent() {
    let docs = [
        "# A\ntext1\n## B\ntext2\n# C\ntext3\n",
        "## A\nx\n## B\ny\n",
        "### X\n## Y\n# Z\n## W\nw",
    ];
    for doc in docs {
        let once = parse_sections(doc);
        let twice = fold_subsections(once.clone());
        assert_eq!(once, twice, "folding again changed {doc:?}");
    }
}

#[test]
fn test_fold_leaves_flat_list_untouched() {
    let flat = vec![
        Section {
            level: 2,
            title: "A".to_string(),
            content: "a\n".to_string(),
        },
        Section {
            level: 2,
            title: "B".to_string(),
            content: "b\n".to_string(),
        },
        Section {
            level: 1,
            title: "C".to_string(),
            content: "c\n".to_string(),
        },
    ];

    assert_eq!(fold_subsections(flat.clone()), flat);
}

#[test]
fn test_crlf_heading_title_is_trimmed() {
    assert_eq!(parse_heading("# Daily\r"), Some((1, "Daily")));

    let sections = parse_sections("# Daily\r\nslept well\r\n");

    assert_eq!(titles(&sections), vec!["Daily"]);
    assert_eq!(sections[0].content, "slept well\r\n\n");
}
