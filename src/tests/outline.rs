use super::{DepthWidths, OutlineCounter};
use crate::paragraph::Paragraph;

fn heading(depth: usize, text: &str) -> Paragraph {
    Paragraph {
        text: text.to_string(),
        style: format!("Heading {depth}"),
        heading_depth: Some(depth),
    }
}

fn body(text: &str) -> Paragraph {
    Paragraph {
        text: text.to_string(),
        style: "Body Text".to_string(),
        heading_depth: None,
    }
}

#[test]
fn test_single_digit_runs_measure_width_one() {
    let paragraphs = vec![
        body("preamble"),
        heading(1, "a"),
        heading(1, "b"),
        heading(1, "c"),
    ];
    let widths = DepthWidths::measure(&paragraphs, 1);
    assert_eq!(widths.levels(), 2);
    assert_eq!(widths.level(0), 1);
    assert_eq!(widths.level(1), 1);
    assert_eq!(widths.level(5), 1, "out-of-range levels default to width 1");
}

#[test]
fn test_trailing_run_counts_at_end_of_stream() {
    // Eleven siblings with no shallower heading after them: the run is
    // still open at end of stream and must widen the level anyway.
    let paragraphs: Vec<Paragraph> = (0..11).map(|i| heading(1, &format!("h{i}"))).collect();
    let widths = DepthWidths::measure(&paragraphs, 1);
    assert_eq!(widths.level(1), 2);
}

#[test]
fn test_widest_sibling_run_wins_across_parents() {
    let mut paragraphs = vec![heading(1, "A")];
    paragraphs.extend((1..=11).map(|i| heading(2, &format!("s{i}"))));
    paragraphs.push(heading(1, "B"));
    paragraphs.extend((1..=4).map(|i| heading(2, &format!("t{i}"))));

    let widths = DepthWidths::measure(&paragraphs, 2);
    assert_eq!(widths.level(1), 1);
    assert_eq!(widths.level(2), 2, "eleven siblings under A need two digits");
}

#[test]
fn test_headings_below_cutoff_do_not_affect_widths() {
    let mut paragraphs = vec![heading(1, "A")];
    paragraphs.extend((0..20).map(|i| heading(3, &format!("deep{i}"))));
    let widths = DepthWidths::measure(&paragraphs, 1);
    assert_eq!(widths.levels(), 2);
    assert_eq!(widths.level(1), 1);
}

#[test]
fn test_file_count_overrides_level_zero() {
    let widths = DepthWidths::measure(&[], 0).with_file_count(9);
    assert_eq!(widths.level(0), 1);
    let widths = DepthWidths::measure(&[], 0).with_file_count(12);
    assert_eq!(widths.level(0), 2);
}

#[test]
fn test_initial_label_carries_the_ordinal() {
    let widths = DepthWidths::measure(&[], 0).with_file_count(9);
    let counter = OutlineCounter::new(widths, 2, false);
    assert_eq!(counter.initial_label("My Book"), "2. - My Book");

    let widths = DepthWidths::measure(&[], 0).with_file_count(12);
    let counter = OutlineCounter::new(widths, 2, false);
    assert_eq!(counter.initial_label("My Book"), "02. - My Book");
}

#[test]
fn test_labels_pad_to_measured_widths() {
    let mut paragraphs = vec![heading(1, "A")];
    paragraphs.extend((1..=11).map(|i| heading(2, &format!("s{i}"))));
    paragraphs.push(heading(1, "B"));
    paragraphs.extend((1..=4).map(|i| heading(2, &format!("t{i}"))));

    let widths = DepthWidths::measure(&paragraphs, 2).with_file_count(1);
    let mut counter = OutlineCounter::new(widths, 1, false);

    let mut labels = Vec::new();
    for paragraph in &paragraphs {
        if let Some(depth) = paragraph.heading_depth {
            if let Some(label) = counter.observe_heading(depth, &paragraph.text) {
                labels.push(label);
            }
        }
    }

    assert_eq!(labels[0], "1.1. - A");
    assert_eq!(labels[1], "1.1.01. - s1");
    assert_eq!(labels[11], "1.1.11. - s11");
    assert_eq!(labels[12], "1.2. - B");
    assert_eq!(labels[16], "1.2.04. - t4", "padding keeps sort order numeric");

    let mut sorted = labels.clone();
    sorted.sort();
    assert_eq!(sorted, labels, "label order survives lexicographic sorting");
}

#[test]
fn test_descendant_counters_reset_under_a_new_parent() {
    let paragraphs = vec![
        heading(1, "a"),
        heading(2, "b"),
        heading(2, "c"),
        heading(1, "d"),
        heading(2, "e"),
    ];
    let widths = DepthWidths::measure(&paragraphs, 2).with_file_count(1);
    let mut counter = OutlineCounter::new(widths, 1, false);

    let labels: Vec<String> = paragraphs
        .iter()
        .filter_map(|p| counter.observe_heading(p.heading_depth.unwrap(), &p.text))
        .collect();
    assert_eq!(
        labels,
        [
            "1.1. - a",
            "1.1.1. - b",
            "1.1.2. - c",
            "1.2. - d",
            "1.2.1. - e",
        ],
        "sibling numbering restarts under each new parent"
    );
}

#[test]
fn test_below_cutoff_headings_track_depth_without_a_label() {
    let widths = DepthWidths::measure(&[heading(1, "x")], 1);
    let mut counter = OutlineCounter::new(widths, 1, false);
    assert_eq!(counter.cutoff(), 1);

    assert_eq!(counter.observe_heading(3, "deep"), None);
    assert_eq!(counter.current_depth(), 3);

    // The fold left the counters untouched.
    assert_eq!(counter.observe_heading(1, "y").unwrap(), "1.1. - y");
    assert_eq!(counter.current_depth(), 1);
}

#[test]
fn test_trailing_zero_appends_one_synthetic_level() {
    let mut paragraphs = vec![heading(1, "A")];
    paragraphs.extend((1..=11).map(|i| heading(2, &format!("s{i}"))));

    let widths = DepthWidths::measure(&paragraphs, 2).with_file_count(1);
    let mut counter = OutlineCounter::new(widths, 1, true);

    assert_eq!(counter.initial_label("T"), "1.0. - T");
    let parent = counter.observe_heading(1, "A").unwrap();
    let leaf = counter.observe_heading(2, "s1").unwrap();
    assert_eq!(parent, "1.1.00. - A");
    assert_eq!(leaf, "1.1.01. - s1", "leaf labels get no synthetic level");
    assert!(parent < leaf, "a parent's own track sorts ahead of its children");
}
