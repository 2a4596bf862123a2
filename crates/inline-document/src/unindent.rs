//! Remove the common indentation of documentation text.

/// Width a tab counts for when measuring indentation.
const TAB_WIDTH: &str = "  ";

/// Strip the indentation shared by every non-blank line of `text`.
///
/// Tabs count as two spaces. Blank lines do not take part in finding the
/// common indentation and come out empty.
pub fn unindent(text: &str) -> String {
    let text = text.replace('\t', TAB_WIDTH);
    let lines: Vec<&str> = text.split('\n').collect();

    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                return "";
            }
            // Indentation made of multi-byte whitespace has no byte boundary at `indent`
            line.get(indent..).unwrap_or_else(|| line.trim_start())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unindent_common_prefix() {
        let text = "\n    Does a thing.\n      Indented example.\n    Done.\n  ";
        assert_eq!(
            unindent(text),
            "\nDoes a thing.\n  Indented example.\nDone.\n"
        );
    }

    #[test]
    fn test_unindent_single_line() {
        assert_eq!(unindent("  Does a thing"), "Does a thing");
    }

    #[test]
    fn test_unindent_tabs_count_as_two_spaces() {
        assert_eq!(unindent("\tone\n  two"), "one\ntwo");
        assert_eq!(unindent("\t\tone\n  two"), "  one\ntwo");
    }

    #[test]
    fn test_unindent_blank_lines_do_not_limit_indent() {
        assert_eq!(unindent("    a\n\n    b"), "a\n\nb");
        assert_eq!(unindent("    a\n  \n    b"), "a\n\nb");
        assert_eq!(unindent("  a\n        \n  b"), "a\n\nb");
    }

    #[test]
    fn test_unindent_without_indentation() {
        assert_eq!(unindent("a\n  b"), "a\n  b");
        assert_eq!(unindent(""), "");
    }
}
