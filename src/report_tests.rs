use super::*;

fn finding(rule: &'static str, line: usize) -> Violation {
    Violation::at_line(rule, line, format!("{rule} at {line}"))
}

#[test]
fn violation_constructors_set_line_presence() {
    let v = Violation::at_line("tab-character", 3, "tab found");
    assert_eq!(v.line, Some(3));

    let v = Violation::file_level("missing-final-newline", "no final newline");
    assert_eq!(v.line, None);
}

#[test]
fn empty_report_is_clean() {
    let report = Report::from_file_reports(Vec::new());
    assert!(report.is_clean());
    assert_eq!(report.files_checked(), 0);
    assert_eq!(report.total_violations(), 0);
}

#[test]
fn clean_files_are_counted_but_not_failing() {
    let report = Report::from_file_reports(vec![
        FileReport::new("src/a.rs".to_string(), Vec::new()),
        FileReport::new("src/b.rs".to_string(), vec![finding("tab-character", 1)]),
    ]);
    assert!(!report.is_clean());
    assert_eq!(report.files_checked(), 2);
    assert_eq!(report.files_with_violations(), 1);
    assert_eq!(report.total_violations(), 1);
}

#[test]
fn files_iterate_in_path_order_regardless_of_insertion() {
    let report = Report::from_file_reports(vec![
        FileReport::new("src/z.rs".to_string(), Vec::new()),
        FileReport::new("src/a.rs".to_string(), Vec::new()),
        FileReport::new("lib/m.rs".to_string(), Vec::new()),
    ]);
    let paths: Vec<_> = report.files().map(|(p, _)| p.to_string()).collect();
    assert_eq!(paths, vec!["lib/m.rs", "src/a.rs", "src/z.rs"]);
}

#[test]
fn violations_keep_emission_order_within_a_file() {
    let report = Report::from_file_reports(vec![FileReport::new(
        "src/a.rs".to_string(),
        vec![
            finding("trailing-whitespace", 5),
            finding("trailing-whitespace", 9),
            finding("line-too-long", 2),
        ],
    )]);
    let (_, violations) = report.files().next().unwrap();
    let order: Vec<_> = violations.iter().map(|v| (v.rule, v.line)).collect();
    assert_eq!(
        order,
        vec![
            ("trailing-whitespace", Some(5)),
            ("trailing-whitespace", Some(9)),
            ("line-too-long", Some(2)),
        ]
    );
}

#[test]
fn report_is_deterministic_across_input_orderings() {
    let forward = vec![
        FileReport::new("a.rs".to_string(), vec![finding("tab-character", 1)]),
        FileReport::new("b.rs".to_string(), Vec::new()),
        FileReport::new("c.rs".to_string(), vec![finding("line-too-long", 7)]),
    ];
    let mut backward = forward.clone();
    backward.reverse();

    let left: Vec<_> = Report::from_file_reports(forward)
        .files()
        .map(|(p, v)| (p.to_string(), v.to_vec()))
        .collect();
    let right: Vec<_> = Report::from_file_reports(backward)
        .files()
        .map(|(p, v)| (p.to_string(), v.to_vec()))
        .collect();
    assert_eq!(left, right);
}
