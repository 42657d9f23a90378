//! Recognising colour utilities among candidates

use crate::theme::TokenTable;

/// Utility prefixes that take a colour token, longest first so that
/// `ring-offset-*` is tried before `ring-*`
const COLOR_PREFIXES: &[&str] = &[
    "placeholder",
    "ring-offset",
    "decoration",
    "border-t",
    "border-r",
    "border-b",
    "border-l",
    "border-x",
    "border-y",
    "outline",
    "divide",
    "border",
    "accent",
    "shadow",
    "stroke",
    "caret",
    "text",
    "ring",
    "fill",
    "from",
    "bg",
    "via",
    "to",
];

/// A candidate that references a colour token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorUtility<'a> {
    /// Utility prefix, e.g. "bg"
    pub utility: &'static str,
    /// Colour token name, e.g. "help-blue"
    pub color: &'a str,
    /// Opacity modifier after `/`, if any
    pub opacity: Option<&'a str>,
}

impl<'a> ColorUtility<'a> {
    /// Interpret a candidate as a colour utility of `table`.
    ///
    /// Variants (`hover:`), the important marker and an opacity modifier are
    /// stripped before matching.
    pub fn parse(candidate: &'a str, table: &TokenTable) -> Option<Self> {
        let mut base = strip_variants(candidate);
        base = base.strip_prefix('!').unwrap_or(base);
        base = base.strip_prefix('-').unwrap_or(base);

        let (base, opacity) = match base.rsplit_once('/') {
            Some((head, tail)) if is_opacity(tail) => (head, Some(tail)),
            _ => (base, None),
        };

        COLOR_PREFIXES.iter().find_map(|&prefix| {
            let color = base.strip_prefix(prefix)?.strip_prefix('-')?;
            table.contains(color).then_some(Self {
                utility: prefix,
                color,
                opacity,
            })
        })
    }
}

/// Drop everything up to the last `:` that is not inside an arbitrary value
fn strip_variants(candidate: &str) -> &str {
    let mut depth = 0usize;
    let mut cut = 0;

    for (idx, ch) in candidate.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => cut = idx + 1,
            _ => {}
        }
    }

    &candidate[cut..]
}

fn is_opacity(tail: &str) -> bool {
    !tail.is_empty()
        && (tail.bytes().all(|b| b.is_ascii_digit())
            || (tail.starts_with('[') && tail.ends_with(']')))
}
