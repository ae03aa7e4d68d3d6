//! Documentation strings as Go comments.

/// How a declaration's documentation is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocMode {
    /// Every line becomes a leading `//` line.
    Block,
    /// A single line trails the declaration; two or more lines lead it.
    Adaptive,
}

/// Documentation split into trimmed comment lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Docs {
    lines: Vec<String>,
}

impl Docs {
    /// Split documentation text into lines.
    ///
    /// Whitespace around each line is stripped and blank lines are dropped,
    /// so an all-whitespace input yields no lines at all.
    pub fn new(text: &str) -> Self {
        let lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { lines }
    }

    /// The comment lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Leading comment lines for `mode`, each prefixed by `indent`.
    pub fn leading(&self, indent: &str, mode: DocMode) -> String {
        if mode == DocMode::Adaptive && self.lines.len() == 1 {
            return String::new();
        }
        self.lines
            .iter()
            .map(|line| format!("{indent}// {line}\n"))
            .collect()
    }

    /// Trailing comment for `mode`, to append on the declaration's own line.
    pub fn trailing(&self, mode: DocMode) -> String {
        match (mode, self.lines.as_slice()) {
            (DocMode::Adaptive, [line]) => format!(" // {line}"),
            _ => String::new(),
        }
    }
}

/// Outline heading for a subsection at `depth` (1 for direct children of the root).
pub fn section_heading(depth: usize, name: &str) -> String {
    format!("//\n// {} {name}\n//\n", "#".repeat(depth))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_trimmed_and_blank_lines_dropped() {
        let docs = Docs::new("  First line.  \n\n\t Second line.\n   ");
        assert_eq!(docs.lines(), ["First line.", "Second line."]);
        assert!(Docs::new(" \n\t\n").lines().is_empty());
        assert!(Docs::new("").lines().is_empty());
    }

    #[test]
    fn test_single_line_trails_in_adaptive_mode() {
        let docs = Docs::new("The item name.");
        assert_eq!(docs.leading("\t", DocMode::Adaptive), "");
        assert_eq!(docs.trailing(DocMode::Adaptive), " // The item name.");
    }

    #[test]
    fn test_single_line_leads_in_block_mode() {
        let docs = Docs::new("The item name.");
        assert_eq!(docs.leading("", DocMode::Block), "// The item name.\n");
        assert_eq!(docs.trailing(DocMode::Block), "");
    }

    #[test]
    fn test_multiple_lines_always_lead() {
        let docs = Docs::new("One.\nTwo.");
        for mode in [DocMode::Block, DocMode::Adaptive] {
            assert_eq!(docs.leading("\t", mode), "\t// One.\n\t// Two.\n");
            assert_eq!(docs.trailing(mode), "");
        }
    }

    #[test]
    fn test_empty_docs_emit_nothing() {
        let docs = Docs::new("");
        for mode in [DocMode::Block, DocMode::Adaptive] {
            assert_eq!(docs.leading("", mode), "");
            assert_eq!(docs.trailing(mode), "");
        }
    }

    #[test]
    fn test_section_heading_depth() {
        assert_eq!(section_heading(1, "Users"), "//\n// # Users\n//\n");
        assert_eq!(section_heading(3, "Keys"), "//\n// ### Keys\n//\n");
    }
}
