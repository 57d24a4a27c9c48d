//! Wildcard Notation Renderer: turns the optimal constraint set
//! from the solver into the display strings shown on the two wildcard
//! tiles during play.

use std::collections::BTreeSet;

use crate::board::constraints::{AnswerConstraintSet, PathConstraintSet};

/// What to print on each wildcard tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardNotation {
    pub first: String,
    pub second: String,
}

/// Renders notation for both wildcards from the (post-filter) optimal
/// constraint set produced by the solver.
pub fn render(optimal: &AnswerConstraintSet) -> WildcardNotation {
    if optimal.contains(PathConstraintSet::Unconstrained) {
        return WildcardNotation {
            first: "*".to_string(),
            second: "*".to_string(),
        };
    }

    WildcardNotation {
        first: render_side(optimal, Side::First),
        second: render_side(optimal, Side::Second),
    }
}

enum Side {
    First,
    Second,
}

fn render_side(optimal: &AnswerConstraintSet, side: Side) -> String {
    let mut letters: BTreeSet<char> = BTreeSet::new();
    let mut free = false;

    for &c in optimal.as_slice() {
        match (&side, c) {
            (Side::First, PathConstraintSet::FirstDecided(a)) => {
                letters.insert(a);
            }
            (Side::First, PathConstraintSet::BothDecided(a, _)) => {
                letters.insert(a);
            }
            (Side::First, PathConstraintSet::Unconstrained | PathConstraintSet::SecondDecided(_)) => {
                free = true;
            }
            (Side::Second, PathConstraintSet::SecondDecided(b)) => {
                letters.insert(b);
            }
            (Side::Second, PathConstraintSet::BothDecided(_, b)) => {
                letters.insert(b);
            }
            (Side::Second, PathConstraintSet::Unconstrained | PathConstraintSet::FirstDecided(_)) => {
                free = true;
            }
            _ => {}
        }
    }

    if free {
        letters_to_tokens(&letters, true)
    } else if letters.len() == 1 {
        letters.iter().next().unwrap().to_ascii_uppercase().to_string()
    } else {
        letters_to_tokens(&letters, false)
    }
}

fn letters_to_tokens(letters: &BTreeSet<char>, with_wildcard_token: bool) -> String {
    // `letters` is already alphabetically ordered (BTreeSet); the wildcard
    // token, if any, always sorts after every letter.
    let mut tokens: Vec<String> = letters.iter().map(|c| c.to_ascii_uppercase().to_string()).collect();
    if with_wildcard_token {
        tokens.push("*".to_string());
    }
    tokens.join(" / ")
}
