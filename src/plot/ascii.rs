//! ASCII bar plot of the point distribution.
//!
//! This is intentionally "dumb" (fixed-width bars), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)

/// Longest label shown before truncation.
const MAX_LABEL: usize = 16;

/// Render one horizontal bar per `(label, value)` pair.
///
/// Bars are scaled so the largest value spans `width` columns. Each row ends
/// with the value and its share of the total.
pub fn render_bar_plot(values: &[(String, f64)], width: usize) -> String {
    let width = width.max(10);
    let total = values.iter().fold(0.0_f64, |acc, (_, v)| acc + v);
    let max = values.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    let mut out = String::new();
    out.push_str(&format!("Plot: {} assignments | total={total:.0} points\n", values.len()));
    if values.is_empty() {
        return out;
    }

    let label_width = values
        .iter()
        .map(|(l, _)| l.chars().count().min(MAX_LABEL))
        .max()
        .unwrap_or(0);

    for (label, value) in values {
        let filled = if max > 0.0 {
            ((value / max) * width as f64).round() as usize
        } else {
            0
        };
        let share = if total > 0.0 { value / total * 100.0 } else { 0.0 };
        let bar = format!("{}{}", "#".repeat(filled), " ".repeat(width - filled.min(width)));
        out.push_str(&format!(
            "{:<label_width$} |{bar} {value:.0} ({share:.1}%)\n",
            truncate(label, MAX_LABEL),
        ));
    }

    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_golden_snapshot_small() {
        let values = vec![
            ("projects".to_string(), 800.0),
            ("final".to_string(), 200.0),
        ];
        let txt = render_bar_plot(&values, 10);
        let expected = concat!(
            "Plot: 2 assignments | total=1000 points\n",
            "projects |########## 800 (80.0%)\n",
            "final    |###        200 (20.0%)\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn long_labels_are_truncated() {
        let values = vec![("Technical Exercises and Labs".to_string(), 10.0)];
        let txt = render_bar_plot(&values, 10);
        assert!(txt.contains("Technical Exerc. |##########"), "{txt}");
    }

    #[test]
    fn empty_plot_has_header_only() {
        assert_eq!(render_bar_plot(&[], 20), "Plot: 0 assignments | total=0 points\n");
    }
}
