/// Token span extraction.
///
/// Spans are inclusive on both ends and address tokens by position in
/// [`SentenceGraph::tokens`]. Rendering lives in
/// [`crate::structures::render_span`].
use crate::graph::{AnalysisError, SentenceGraph};
use crate::newtypes::NodeId;
use crate::structures::{Token, render_span};

impl SentenceGraph {
    /// Returns the tokens at positions `from..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::SpanOutOfRange`] if `from > end` or `end` is
    /// not a valid token position.
    pub fn token_span(&self, from: usize, end: usize) -> Result<&[Token], AnalysisError> {
        let out_of_range = AnalysisError::SpanOutOfRange {
            from,
            end,
            len: self.tokens.len(),
        };
        if from > end {
            return Err(out_of_range);
        }
        self.tokens.get(from..=end).ok_or(out_of_range)
    }

    /// Renders the tokens covered by the first anchor of node `id`.
    ///
    /// An unanchored node renders as the empty string.
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::UnknownNode`] if `id` is not a node of this graph.
    /// - [`AnalysisError::SpanOutOfRange`] if the anchor reaches past the
    ///   last token.
    pub fn node_text(&self, id: NodeId) -> Result<String, AnalysisError> {
        let node = self.node(id).ok_or(AnalysisError::UnknownNode(id))?;
        match node.anchors.first() {
            Some(anchor) => Ok(render_span(self.token_span(anchor.from, anchor.end)?)),
            None => Ok(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::structures::{Anchor, Node};
    use crate::test_helpers::tokens;

    fn sentence() -> SentenceGraph {
        let forms = ["The", "dog", "barked", "loudly", "."];
        let tokens = forms
            .iter()
            .enumerate()
            .map(|(i, form)| Token::new(i, *form))
            .collect();
        let nodes = vec![
            Node::new(0u32, "_the_q", vec![Anchor::at(0)]),
            Node::new(1u32, "_dog_n_1", vec![Anchor::at(1)]),
            Node::new(2u32, "_bark_v_1", vec![Anchor::new(2, 3), Anchor::at(4)]),
            Node::new(3u32, "udef_q", vec![]),
            Node::new(4u32, "broken", vec![Anchor::new(3, 12)]),
        ];
        SentenceGraph::new("20001001", nodes, vec![])
            .expect("builds")
            .with_tokens(tokens)
    }

    #[test]
    fn single_position_renders_its_form() {
        let g = sentence();
        for (i, token) in g.tokens().iter().enumerate() {
            let span = g.token_span(i, i).expect("in range");
            assert_eq!(render_span(span), token.form);
        }
    }

    #[test]
    fn span_is_inclusive() {
        let g = sentence();
        let span = g.token_span(0, 2).expect("in range");
        assert_eq!(span.len(), 3);
        assert_eq!(render_span(span), "The dog barked");
    }

    #[test]
    fn whole_sentence_span() {
        let g = sentence();
        assert_eq!(
            render_span(g.token_span(0, 4).expect("in range")),
            "The dog barked loudly ."
        );
    }

    #[test]
    fn end_past_last_token_is_rejected() {
        let g = sentence();
        assert_eq!(
            g.token_span(3, 5),
            Err(AnalysisError::SpanOutOfRange {
                from: 3,
                end: 5,
                len: 5
            })
        );
    }

    #[test]
    fn inverted_span_is_rejected() {
        let g = sentence();
        assert!(matches!(
            g.token_span(3, 1),
            Err(AnalysisError::SpanOutOfRange { from: 3, end: 1, .. })
        ));
    }

    #[test]
    fn graph_without_tokens_has_no_spans() {
        let g = SentenceGraph::new("g", vec![], vec![]).expect("builds");
        assert!(g.token_span(0, 0).is_err());
    }

    #[test]
    fn node_text_uses_first_anchor() {
        let g = sentence();
        assert_eq!(g.node_text(NodeId(1)).expect("anchored"), "dog");
        assert_eq!(g.node_text(NodeId(2)).expect("anchored"), "barked loudly");
        assert_eq!(g.node_text(NodeId(3)).expect("unanchored"), "");
    }

    #[test]
    fn node_text_reports_bad_input() {
        let g = sentence();
        assert_eq!(
            g.node_text(NodeId(9)),
            Err(AnalysisError::UnknownNode(NodeId(9)))
        );
        assert!(matches!(
            g.node_text(NodeId(4)),
            Err(AnalysisError::SpanOutOfRange { end: 12, .. })
        ));
    }

    #[test]
    fn helper_tokens_render_in_order() {
        let g = SentenceGraph::new("g", vec![], vec![])
            .expect("builds")
            .with_tokens(tokens(3));
        assert_eq!(render_span(g.token_span(0, 2).expect("in range")), "t0 t1 t2");
    }
}
