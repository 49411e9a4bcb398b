//! Line-oriented code emission primitives.
//!
//! Every renderer in this crate produces an ordered `Vec<String>` of source
//! lines rather than a concatenated string. Content decisions (what to say)
//! stay in the renderers; the transforms here handle formatting (comment
//! prefixing, indentation, import-block layout) as order-preserving passes
//! over that representation. The caller joins the final document with
//! newlines when persisting it.

use std::collections::BTreeSet;

/// Prefix each line with the Go line-comment marker.
///
/// Empty lines become `// ` so that a blank line inside a multi-line
/// description stays inside the comment block.
pub fn comment<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|l| format!("// {}", l.as_ref()))
        .collect()
}

/// Split a description into lines and comment each one.
///
/// Convenience for the common "optional multi-line description" case in the
/// model; `comment_block("a\nb")` yields `["// a", "// b"]`.
pub fn comment_block(text: &str) -> Vec<String> {
    comment(&text.split('\n').collect::<Vec<_>>())
}

/// Indent each non-empty line by `level` steps of two spaces.
///
/// Empty lines are left empty so rendered blocks never carry trailing
/// whitespace.
pub fn indent(lines: Vec<String>, level: usize) -> Vec<String> {
    if level == 0 {
        return lines;
    }
    let pad = "  ".repeat(level);
    lines
        .into_iter()
        .map(|l| if l.is_empty() { l } else { format!("{pad}{l}") })
        .collect()
}

/// Render an accumulated import set as the body of a Go `import (...)` block.
///
/// The set is ordered, so repeated runs over an unchanged model produce
/// byte-identical output. The result is a substitution value for the
/// package-header template; the template mechanism itself lives upstream.
pub fn imports_block(imports: &BTreeSet<String>) -> String {
    indent(imports.iter().map(|i| format!("\"{i}\"")).collect(), 2).join("\n")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_comment_prefixes_every_line() {
        assert_eq!(comment(&["a", "", "b"]), vec!["// a", "// ", "// b"]);
    }

    #[test]
    fn test_comment_block_splits_description() {
        assert_eq!(comment_block("first\nsecond"), vec!["// first", "// second"]);
    }

    #[test]
    fn test_indent_skips_empty_lines() {
        let lines = vec!["x".to_string(), String::new(), "y".to_string()];
        assert_eq!(indent(lines, 2), vec!["    x", "", "    y"]);
    }

    #[test]
    fn test_indent_level_zero_is_identity() {
        let lines = vec!["x".to_string()];
        assert_eq!(indent(lines.clone(), 0), lines);
    }

    #[test]
    fn test_imports_block_is_sorted_and_quoted() {
        let mut imports = BTreeSet::new();
        imports.insert("strconv".to_string());
        imports.insert("context".to_string());
        imports.insert("net/http".to_string());
        assert_eq!(
            imports_block(&imports),
            "    \"context\"\n    \"net/http\"\n    \"strconv\""
        );
    }
}
