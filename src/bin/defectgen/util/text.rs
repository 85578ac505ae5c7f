/// Greedy word wrap; words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Shortens `s` to at most `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        n => {
            let mut out: String = s.chars().take(n - 1).collect();
            out.push('…');
            out
        }
    }
}

/// `"1 molecule"`, `"4 molecules"`.
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Compact rendering of an id list, collapsing ascending runs into ranges.
pub fn id_ranges(ids: &[i64]) -> String {
    let mut parts = Vec::new();
    let mut iter = ids.iter().copied().peekable();

    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        if end == start {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{start}–{end}"));
        }
    }

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("index 3 missing", 40), vec!["index 3 missing"]);
    }

    #[test]
    fn wrap_breaks_at_width() {
        assert_eq!(
            wrap("cannot rebind molecule ids", 14),
            vec!["cannot rebind", "molecule ids"]
        );
    }

    #[test]
    fn wrap_empty_yields_single_blank_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncate_keeps_short_strings() {
        assert_eq!(truncate("body", 4), "body");
    }

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("angular_momentum", 8), "angular…");
        assert_eq!(truncate("mass", 0), "");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "molecule"), "1 molecule");
        assert_eq!(plural(0, "cell"), "0 cells");
    }

    #[test]
    fn id_ranges_collapse_runs() {
        assert_eq!(id_ranges(&[8, 9, 10, 11]), "8–11");
        assert_eq!(id_ranges(&[12, 14, 18, 20]), "12, 14, 18, 20");
        assert_eq!(id_ranges(&[8, 10, 9, 10]), "8, 10, 9–10");
        assert_eq!(id_ranges(&[]), "");
    }
}
