//! Directive extraction from plan documents.

use std::fmt;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PlanError;

static DIRECTIVE_LINE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.\s+\*\*([^*]+)\*\*\s+(.+)$").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Fetch,
    Extract,
    Validate,
    Run,
}

impl DirectiveKind {
    /// Case-insensitive verb lookup. Unknown verbs are not directives.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb.trim().to_ascii_lowercase().as_str() {
            "download" => Some(Self::Fetch),
            "unzip" => Some(Self::Extract),
            "validate" => Some(Self::Validate),
            "implement" => Some(Self::Run),
            _ => None,
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Self::Fetch => "download",
            Self::Extract => "unzip",
            Self::Validate => "validate",
            Self::Run => "implement",
        }
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub target: String,
    pub source_line: String,
}

impl Directive {
    /// Parse one line, or `None` if it is not a directive.
    pub fn parse_line(line: &str) -> Option<Self> {
        let regex = DIRECTIVE_LINE.as_ref()?;
        let caps = regex.captures(line)?;

        let kind = DirectiveKind::from_verb(&caps[1])?;
        let target = caps[2].trim();
        if target.is_empty() {
            return None;
        }

        Some(Self {
            kind,
            target: target.to_string(),
            source_line: line.to_string(),
        })
    }
}

/// Extract directives in document order.
pub fn parse_plan(text: &str) -> Vec<Directive> {
    text.lines().filter_map(Directive::parse_line).collect()
}

/// Read and parse the plan at `path`.
pub async fn read_plan(path: &Path) -> Result<Vec<Directive>, PlanError> {
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_plan(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = "\
# Setup

Some prose first.

1. **download** https://example.com/doc.zip
2. **unzip** out
   3. **Validate** **/*.md
- **implement** not-ordered
4. **deploy** somewhere
5. **implement**   build  \r
6. **download**
7. download https://example.com/plain
";

    #[test]
    fn keeps_document_order_and_skips_noise() {
        let directives = parse_plan(PLAN);
        let kinds: Vec<_> = directives.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            [
                DirectiveKind::Fetch,
                DirectiveKind::Extract,
                DirectiveKind::Validate,
                DirectiveKind::Run
            ]
        );
        assert_eq!(directives[0].target, "https://example.com/doc.zip");
        assert_eq!(directives[2].target, "**/*.md");
        assert_eq!(directives[3].target, "build");
    }

    #[test]
    fn source_line_is_verbatim() {
        let directives = parse_plan(PLAN);
        assert_eq!(directives[2].source_line, "   3. **Validate** **/*.md");
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse_plan(PLAN), parse_plan(PLAN));
    }

    #[test]
    fn duplicates_are_kept() {
        let directives = parse_plan("1. **unzip** a\n1. **unzip** a\n");
        assert_eq!(directives.len(), 2);
        assert_eq!(directives[0], directives[1]);
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(DirectiveKind::from_verb("UNZIP"), Some(DirectiveKind::Extract));
        assert_eq!(DirectiveKind::from_verb("Implement"), Some(DirectiveKind::Run));
        assert_eq!(DirectiveKind::from_verb("fetch"), None);
    }

    #[test]
    fn empty_plan_has_no_directives() {
        assert!(parse_plan("").is_empty());
        assert!(parse_plan("just text\n\n").is_empty());
    }

    #[tokio::test]
    async fn missing_plan_is_read_error() {
        let result = read_plan(Path::new("definitely/not/here/plan.md")).await;
        assert!(matches!(result, Err(PlanError::Read { .. })));
    }
}
