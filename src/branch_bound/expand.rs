//! Child state generation with strict-improvement pruning.

use super::SearchState;

/// Expands a parent state into child states, one per unsettled city.
///
/// For each city `i` not yet in the prefix, the candidate bound advances
/// by the parent matrix's entry at `(i, last_settled)`, or zero for the
/// root, which has no last city. Candidates that cannot strictly beat the
/// incumbent are discarded before any matrix is cloned; this also removes
/// candidates whose connecting entry was already forbidden (an infinite
/// bound can never beat the finite incumbent). Surviving children get
/// their own matrix copy with row `i` and column `last_settled` forbidden,
/// then a fresh reduction whose total tightens the child bound, followed
/// by a second pruning check against the incumbent.
///
/// Children are returned sorted ascending by bound, a local sort over
/// this expansion only, not a reordering of the whole frontier.
pub fn expand(parent: &SearchState, incumbent_cost: f64) -> Vec<SearchState> {
    let n = parent.matrix().size();
    let last = parent.last_settled();
    let mut children = Vec::new();

    for i in 0..n {
        if parent.contains(i) {
            continue;
        }

        let edge = match last {
            Some(l) => parent.matrix().get(i, l),
            None => 0.0,
        };
        let candidate = parent.bound() + edge;
        if candidate >= incumbent_cost {
            continue;
        }

        let mut matrix = parent.matrix().clone();
        matrix.forbid_row(i);
        if let Some(l) = last {
            matrix.forbid_col(l);
        }

        let mut settled = Vec::with_capacity(parent.settled().len() + 1);
        settled.extend_from_slice(parent.settled());
        settled.push(i);

        let mut bound = candidate;
        if settled.len() < n {
            // Re-reducing the child matrix tightens the bound beyond the
            // traversed edge cost, so re-check the prune with it.
            bound += matrix.reduce();
            if bound >= incumbent_cost {
                continue;
            }
        }

        children.push(SearchState::new(bound, settled, matrix));
    }

    children.sort_by(|a, b| a.bound().total_cmp(&b.bound()));
    children
}
