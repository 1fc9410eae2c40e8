//! Label and word pools for generated graphs.
//!
//! Labels follow the ERG naming scheme (`_lemma_pos_sense`, grammar
//! predicates without a leading underscore) so label searches over a
//! generated corpus hit a realistic mix of common and rare labels.

use rand::Rng;
use rand::rngs::StdRng;

const PREDICATES: &[&str] = &[
    "_dog_n_1",
    "_cat_n_1",
    "_bark_v_1",
    "_sleep_v_1",
    "_chase_v_1",
    "_big_a_1",
    "_loud_a_1",
    "_quick_a_1",
    "_house_n_of",
    "_see_v_1",
    "_give_v_1",
    "_in_p",
    "_with_p",
    "_and_c",
    "compound",
    "named",
    "pron",
    "poss",
    "neg",
    "card",
];

const QUANTIFIERS: &[&str] = &["_the_q", "_a_q", "udef_q", "pronoun_q", "proper_q", "_every_q"];

const EDGE_LABELS: &[&str] = &["ARG1", "ARG2", "ARG3", "BV", "L-INDEX", "R-INDEX", "MOD"];

const POST_LABELS: &[&str] = &["", "", "", "EQ", "NEQ", "H", "HEQ"];

const FORMS: &[&str] = &[
    "the", "a", "dog", "cat", "barked", "slept", "chased", "big", "loud", "quickly", "house",
    "saw", "gave", "in", "with", "and", "every", "Kim", "Sandy", "not", ".", ",",
];

fn pick<'a>(rng: &mut StdRng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// A node label; roughly one in four is a quantifier.
pub fn node_label(rng: &mut StdRng) -> &'static str {
    if rng.gen_bool(0.25) {
        pick(rng, QUANTIFIERS)
    } else {
        pick(rng, PREDICATES)
    }
}

/// An edge label and its post-label (often empty).
pub fn edge_labels(rng: &mut StdRng) -> (&'static str, &'static str) {
    (pick(rng, EDGE_LABELS), pick(rng, POST_LABELS))
}

/// A surface token form.
pub fn form(rng: &mut StdRng) -> &'static str {
    pick(rng, FORMS)
}
