//! Assignment line parser.
//!
//! Line grammar (whitespace separated):
//!
//! ```text
//! <points> [x <multiplier>] <name words...>[ (<short label>)]
//! ```
//!
//! Skip policy: a line that is blank, whose first token is not a non-negative
//! number, or whose `x` is followed by a non-numeric multiplier produces no
//! record and adds nothing to the total. Nothing here logs or fails.

use crate::domain::{AssignmentCollection, AssignmentRecord};

/// Parse every line, keeping input order and skipping malformed lines.
pub fn parse_assignments<I, S>(lines: I) -> AssignmentCollection
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

/// Parse a whole text block (as typed into the editor or read from a file).
pub fn parse_assignment_text(text: &str) -> AssignmentCollection {
    parse_assignments(text.lines())
}

/// Parse a single line, or `None` when the line should be skipped.
pub fn parse_line(line: &str) -> Option<AssignmentRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [first, tail @ ..] = fields.as_slice() else {
        return None;
    };
    let base = parse_points(first)?;

    let (points, display_weight, name_fields) = match tail {
        ["x", multiplier, rest @ ..] => {
            let multiplier_value = parse_points(multiplier)?;
            (base * multiplier_value, format!("{first} x {multiplier}"), rest)
        }
        _ => (base, first.to_string(), tail),
    };

    let name = name_fields.join(" ");
    let (long, short) = split_short_label(&name);

    Some(AssignmentRecord::new(points, display_weight, long, short))
}

/// Split a trailing `(short)` suffix off a name.
///
/// Returns `(name_without_suffix, short_label)`. The suffix must close the
/// string and hold at least one character and no `)`. Without one, both
/// halves are the input.
pub fn split_short_label(name: &str) -> (&str, &str) {
    let Some(body) = name.strip_suffix(')') else {
        return (name, name);
    };

    // The label cannot contain ')', so the opening paren must come after the
    // last ')' in the body. The leftmost '(' in that stretch wins.
    let segment_start = body.rfind(')').map_or(0, |i| i + 1);
    let Some(open) = body[segment_start..].find('(').map(|i| segment_start + i) else {
        return (name, name);
    };

    let short = &body[open + 1..];
    if short.is_empty() {
        return (name, name);
    }

    (name[..open].trim(), short)
}

/// Parse a point value or multiplier: finite and non-negative.
fn parse_points(token: &str) -> Option<f64> {
    let v = token.parse::<f64>().ok()?;
    (v.is_finite() && v >= 0.0).then_some(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_line_with_short_label() {
        let r = parse_line("400 x 2 major projects (projects)").unwrap();
        assert_eq!(r.points(), 800.0);
        assert_eq!(r.display_weight(), "400 x 2");
        assert_eq!(r.name(), "major projects");
        assert_eq!(r.short_label(), "projects");
    }

    #[test]
    fn plain_line_with_short_label() {
        let r = parse_line("140 final exam (final)").unwrap();
        assert_eq!(r.points(), 140.0);
        assert_eq!(r.display_weight(), "140");
        assert_eq!(r.name(), "final exam");
        assert_eq!(r.short_label(), "final");
    }

    #[test]
    fn short_label_defaults_to_name() {
        let r = parse_line("300 x 1 midterm").unwrap();
        assert_eq!(r.points(), 300.0);
        assert_eq!(r.display_weight(), "300 x 1");
        assert_eq!(r.name(), "midterm");
        assert_eq!(r.short_label(), "midterm");
    }

    #[test]
    fn non_numeric_lines_are_skipped() {
        let c = parse_assignments(["1750 Participation", "abc not a number"]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.records()[0].name(), "Participation");
        assert_eq!(c.records()[0].points(), 1750.0);
        assert_eq!(c.total_points(), 1750.0);
    }

    #[test]
    fn blank_and_negative_lines_are_skipped() {
        let c = parse_assignments(["", "   \t", "-50 penalty", "NaN odd", "inf forever", "10 ok"]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.total_points(), 10.0);
    }

    #[test]
    fn malformed_multiplier_skips_whole_line() {
        assert!(parse_line("100 x two readings").is_none());
        assert!(parse_line("100 x -2 readings").is_none());

        let c = parse_assignments(["100 x two readings", "50 quiz"]);
        assert_eq!(c.len(), 1);
        assert_eq!(c.total_points(), 50.0);
    }

    #[test]
    fn dangling_x_is_part_of_the_name() {
        let r = parse_line("400 x").unwrap();
        assert_eq!(r.points(), 400.0);
        assert_eq!(r.display_weight(), "400");
        assert_eq!(r.name(), "x");
    }

    #[test]
    fn number_only_line_has_empty_name() {
        let r = parse_line("  25  ").unwrap();
        assert_eq!(r.points(), 25.0);
        assert_eq!(r.name(), "");
        assert_eq!(r.short_label(), "");
    }

    #[test]
    fn multiplier_display_keeps_original_tokens() {
        let r = parse_line("12.5 x 4 labs").unwrap();
        assert_eq!(r.points(), 50.0);
        assert_eq!(r.display_weight(), "12.5 x 4");
    }

    #[test]
    fn whitespace_in_name_is_collapsed() {
        let r = parse_line("100\tx 3   Reading    Responses   (Readings)").unwrap();
        assert_eq!(r.name(), "Reading Responses");
        assert_eq!(r.short_label(), "Readings");
    }

    #[test]
    fn total_is_exact_sum_in_input_order() {
        let text = "325 x 3 Reading Responses\r\n475 x 6 Technical Exercises\r\nnotes here\r\n\
                    400 x 1 Presentation/Demo\r\n550 x 2 Project Drafts\r\n\
                    920 x 2 Major Projects\r\n1750 Participation\r\n";
        let c = parse_assignment_text(text);
        let names: Vec<&str> = c.records().iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            [
                "Reading Responses",
                "Technical Exercises",
                "Presentation/Demo",
                "Project Drafts",
                "Major Projects",
                "Participation",
            ]
        );
        let sum: f64 = c.records().iter().map(|r| r.points()).sum();
        assert_eq!(c.total_points(), sum);
        assert_eq!(c.total_points(), 975.0 + 2850.0 + 400.0 + 1100.0 + 1840.0 + 1750.0);
    }

    #[test]
    fn short_label_edge_cases() {
        assert_eq!(split_short_label("a (b) (c)"), ("a (b)", "c"));
        assert_eq!(split_short_label("a (b (c)"), ("a", "b (c"));
        assert_eq!(split_short_label("empty ()"), ("empty ()", "empty ()"));
        assert_eq!(split_short_label("(only)"), ("", "only"));
        assert_eq!(
            split_short_label("trailing (x) more"),
            ("trailing (x) more", "trailing (x) more")
        );
        assert_eq!(split_short_label("no label"), ("no label", "no label"));
    }
}
