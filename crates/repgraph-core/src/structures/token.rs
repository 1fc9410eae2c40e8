use serde::{Deserialize, Serialize};

/// One token of the surface sentence.
///
/// `index` is the token's position in [`crate::SentenceGraph::tokens`]; the
/// analysis engine addresses tokens by position, not by this field, but
/// transport keeps it for round-trip fidelity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Position of the token in the sentence.
    pub index: usize,
    /// Surface form as it appears in the input.
    pub form: String,
    /// Lemma, when the corpus provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lemma: Option<String>,
    /// Constant argument (`carg`) for named entities and numbers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carg: Option<String>,
}

impl Token {
    /// Creates a token with only a position and surface form.
    pub fn new(index: usize, form: impl Into<String>) -> Self {
        Self {
            index,
            form: form.into(),
            lemma: None,
            carg: None,
        }
    }
}

/// Joins the surface forms of `tokens` with single spaces.
///
/// The result has no leading or trailing whitespace; an empty slice renders
/// as the empty string.
pub fn render_span(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(&token.form);
    }
    out
}
