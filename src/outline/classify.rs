//! Line classification
//!
//! Decides whether a single line declares a symbol, which kind, its name and
//! the column navigation should land on. Stateless: the result depends only on
//! the line's text.
//!
//! Rules are tried in declaration order and the first match wins:
//! class/module > function (free or member) > variable > attribute > enum >
//! type alias/interface > event. New kinds are added by appending a rule.
//! Matches that start inside a string literal or comment are skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use super::OutlineKind;
use crate::config::ColumnPolicy;

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:class|namespace|module)\s+([A-Za-z_$][\w$]*)").unwrap()
});

static FREE_FN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bfunction(?:\s*\*\s*|\s+)([A-Za-z_$][\w$]*)\s*(?:<.*?>)?\s*\(").unwrap()
});

/// `[modifiers] name(params) [: ReturnType] {` anchored at the indentation
static MEMBER_FN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*((?:(?:public|private|protected|static|async|abstract|override|readonly|get|set)\s+)*)\*?\s*([A-Za-z_$][\w$]*)\s*(?:<.*?>)?\s*\(([^)]*)\)\s*(?::\s*[^;{]+?)?\s*\{",
    )
    .unwrap()
});

static VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:const|let|var)\s+([A-Za-z_$][\w$]*)").unwrap());

/// Captures: name, operator, first non-blank char of the right-hand side
static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(?:(?:private|public|protected|static|readonly|declare|abstract|override)\s+)*([A-Za-z_$][\w$]*)\??\s*([:=])\s*(\S)",
    )
    .unwrap()
});

static ENUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\benum\s+([A-Za-z_$][\w$]*)\s*\{").unwrap());

static TYPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:interface|type)\s+([A-Za-z_$][\w$]*)").unwrap());

static EVENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bevent\s+[\w$.<>,\[\]]+\s+([A-Za-z_$][\w$]*)\s*[;{=]").unwrap()
});

/// Words that look like `name(...) {` but are statements, not members
const CONTROL_KEYWORDS: &[&str] = &[
    "if", "for", "while", "switch", "catch", "with", "return", "function", "do", "else",
    "typeof", "new", "await", "yield", "super", "this",
];

static DEFAULT_CLASSIFIER: Lazy<LineClassifier> = Lazy::new(LineClassifier::default);

/// Raw result of a rule: the extracted name and the byte offset where the
/// declaration match starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub name: String,
    pub start: usize,
}

/// Predicate + extractor for one symbol kind
pub type RuleMatcher = fn(&str) -> Option<RuleMatch>;

#[derive(Clone, Copy)]
struct Rule {
    kind: OutlineKind,
    matcher: RuleMatcher,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// A line that declares a symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub kind: OutlineKind,
    pub name: String,
    /// Char offset used as navigation target, per [`ColumnPolicy`]
    pub column: Option<usize>,
}

/// Ordered list of classification rules
#[derive(Debug, Clone)]
pub struct LineClassifier {
    rules: Vec<Rule>,
    column: ColumnPolicy,
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(ColumnPolicy::default())
    }
}

impl LineClassifier {
    /// Classifier with the standard rule set
    pub fn new(column: ColumnPolicy) -> Self {
        let rules = vec![
            Rule {
                kind: OutlineKind::Class,
                matcher: match_class,
            },
            Rule {
                kind: OutlineKind::Function,
                matcher: match_function,
            },
            Rule {
                kind: OutlineKind::Variable,
                matcher: match_variable,
            },
            Rule {
                kind: OutlineKind::Attribute,
                matcher: match_attribute,
            },
            Rule {
                kind: OutlineKind::Enum,
                matcher: match_enum,
            },
            Rule {
                kind: OutlineKind::TypeAlias,
                matcher: match_type_alias,
            },
            Rule {
                kind: OutlineKind::Event,
                matcher: match_event,
            },
        ];
        Self { rules, column }
    }

    /// Classifier with no rules; every line is empty until rules are appended
    pub fn empty(column: ColumnPolicy) -> Self {
        Self {
            rules: Vec::new(),
            column,
        }
    }

    /// Append a rule with the lowest priority
    pub fn with_rule(mut self, kind: OutlineKind, matcher: RuleMatcher) -> Self {
        self.rules.push(Rule { kind, matcher });
        self
    }

    pub fn column_policy(&self) -> ColumnPolicy {
        self.column
    }

    /// Kinds in priority order
    pub fn kinds(&self) -> impl Iterator<Item = OutlineKind> + '_ {
        self.rules.iter().map(|r| r.kind)
    }

    /// Classify one line. `None` when no rule matches, or when the winning
    /// rule extracted an empty name.
    ///
    /// A match that starts inside a string literal or a comment does not
    /// count, and the next rule is tried.
    pub fn classify(&self, line: &str) -> Option<Classified> {
        let (kind, found) = self.rules.iter().find_map(|rule| {
            (rule.matcher)(line)
                .filter(|m| !in_literal_or_comment(line, m.start))
                .map(|m| (rule.kind, m))
        })?;

        if found.name.is_empty() {
            return None;
        }

        Some(Classified {
            kind,
            column: self.column_for(kind, line, found.start),
            name: found.name,
        })
    }

    fn column_for(&self, kind: OutlineKind, line: &str, start: usize) -> Option<usize> {
        match self.column {
            ColumnPolicy::MatchStart => match kind {
                OutlineKind::Function | OutlineKind::Variable => Some(char_column(line, start)),
                _ => Some(first_non_whitespace(line)),
            },
            ColumnPolicy::FirstNonWhitespace => Some(first_non_whitespace(line)),
            ColumnPolicy::Fixed(column) => Some(column),
            ColumnPolicy::Omit => None,
        }
    }
}

/// Classify with the standard rules and default column policy
pub fn classify(line: &str) -> Option<Classified> {
    DEFAULT_CLASSIFIER.classify(line)
}

/// Char index of the first non-whitespace char (0 for blank lines)
pub(crate) fn first_non_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Code,
    Quoted(char),
    BlockComment,
}

/// Whether byte offset `pos` lies inside a string literal, a `/* */` comment
/// or a `//` comment opened earlier on the same line
fn in_literal_or_comment(line: &str, pos: usize) -> bool {
    let mut state = LexState::Code;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if idx >= pos {
            break;
        }
        let next = chars.peek().map(|&(_, n)| n);
        match state {
            LexState::Code => match c {
                '"' | '\'' | '`' => state = LexState::Quoted(c),
                '/' if next == Some('/') => return true,
                '/' if next == Some('*') => {
                    chars.next();
                    state = LexState::BlockComment;
                }
                _ => {}
            },
            LexState::Quoted(quote) => {
                if c == '\\' {
                    chars.next();
                } else if c == quote {
                    state = LexState::Code;
                }
            }
            LexState::BlockComment => {
                if c == '*' && next == Some('/') {
                    chars.next();
                    state = LexState::Code;
                }
            }
        }
    }

    state != LexState::Code
}

fn char_column(line: &str, byte: usize) -> usize {
    line.get(..byte).map(|s| s.chars().count()).unwrap_or(0)
}

fn capture_at(re: &Regex, line: &str, group: usize) -> Option<RuleMatch> {
    let caps = re.captures(line)?;
    let start = caps.get(0)?.start();
    let name = caps.get(group)?.as_str().to_string();
    Some(RuleMatch { name, start })
}

fn match_class(line: &str) -> Option<RuleMatch> {
    capture_at(&CLASS_RE, line, 1)
}

/// Free `function name(` wins over the member form when both appear.
fn match_function(line: &str) -> Option<RuleMatch> {
    if let Some(free) = capture_at(&FREE_FN_RE, line, 1) {
        return Some(free);
    }

    let caps = MEMBER_FN_RE.captures(line)?;
    let name = caps.get(2)?.as_str();
    if CONTROL_KEYWORDS.contains(&name) {
        return None;
    }
    // Group 1 (modifiers) always participates, so its start is the end of
    // the indentation.
    let start = caps.get(1).map(|m| m.start()).unwrap_or(0);
    Some(RuleMatch {
        name: name.to_string(),
        start,
    })
}

/// Rejects `const x == y` style comparisons.
fn match_variable(line: &str) -> Option<RuleMatch> {
    let caps = VAR_RE.captures(line)?;
    let whole = caps.get(0)?;
    let name = caps.get(1)?.as_str();
    if name == "enum" {
        return None;
    }

    let rest = line[whole.end()..].trim_start();
    if rest.starts_with("==") {
        return None;
    }

    Some(RuleMatch {
        name: name.to_string(),
        start: whole.start(),
    })
}

/// Rejects `==`, `=>` and `::` operators and empty (`;`) right-hand sides.
fn match_attribute(line: &str) -> Option<RuleMatch> {
    let caps = ATTR_RE.captures(line)?;
    let op = caps.get(2)?.as_str();
    let next = caps.get(3)?.as_str();

    let rejected = match op {
        "=" => next == "=" || next == ">",
        ":" => next == ":",
        _ => false,
    };
    if rejected || next == ";" {
        return None;
    }

    let name = caps.get(1)?;
    Some(RuleMatch {
        name: name.as_str().to_string(),
        start: caps.get(0)?.start(),
    })
}

fn match_enum(line: &str) -> Option<RuleMatch> {
    capture_at(&ENUM_RE, line, 1)
}

fn match_type_alias(line: &str) -> Option<RuleMatch> {
    capture_at(&TYPE_RE, line, 1)
}

fn match_event(line: &str) -> Option<RuleMatch> {
    capture_at(&EVENT_RE, line, 1)
}
