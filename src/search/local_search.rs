use std::cmp::max;

use fastrand::Rng;

use crate::instance::{Instance, VertexId, GroupId};
use crate::eval::{Assignment, conflicts, objective, delta_conflicts, renumber_groups, is_feasible};

/// default cap on the number of outer passes. A safety bound: the natural
/// stopping criterion is a full pass without an accepted move.
pub const DEFAULT_NB_PASSES:usize = 1000;

/** first-improvement hill-climbing under the lexicographic
(conflicts, then group count) preference.

Each outer pass visits the vertices in random order; for each vertex, the
candidate targets are all opened groups plus one new-group slot, shuffled.
The first candidate that strictly reduces the conflict count, or keeps it
while not increasing the group count, is applied immediately and the vertex
scan restarts. Conflict variations are evaluated incrementally through
`delta_conflicts` (O(d(v)) per trial instead of O(m)).

After termination the group ids are renumbered for contiguity; if the
renumbered result is not feasible, the untouched input is returned instead
(stale-input fallback).
*/
pub fn local_search(inst:&Instance, assignment:&Assignment, max_passes:usize, seed:u64) -> Assignment {
    let rng = Rng::with_seed(seed);
    let n = inst.nb_vertices();
    let mut working = assignment.clone();
    let (mut nb_conflicts, mut nb_groups) = match (conflicts(inst, &working), objective(&working)) {
        (Some(c), Some(o)) => (c as i64, o),
        _ => {
            eprintln!("warning: local search called on an incomplete assignment, returning it unchanged");
            return assignment.clone();
        }
    };
    for _ in 0..max_passes {
        let mut improved = false;
        let mut vertices:Vec<VertexId> = (0..n).collect();
        rng.shuffle(&mut vertices);
        'pass: for v in vertices {
            let current_group = match working[v] {
                Some(g) => g,
                None => continue,
            };
            // all opened groups plus one new-group slot
            let mut targets:Vec<GroupId> = (0..=nb_groups).collect();
            rng.shuffle(&mut targets);
            for target in targets {
                if target == current_group { continue; }
                let delta = delta_conflicts(inst, &working, v, target);
                let new_nb_groups = max(nb_groups, target+1);
                // fewer conflicts always wins; equal conflicts only if the
                // group count does not grow
                if delta < 0 || (delta == 0 && new_nb_groups <= nb_groups) {
                    working[v] = Some(target);
                    nb_conflicts += delta;
                    nb_groups = new_nb_groups;
                    improved = true;
                    break 'pass; // first improvement: restart the vertex scan
                }
            }
        }
        if !improved { break; } // local optimum
    }
    debug_assert_eq!(conflicts(inst, &working), Some(nb_conflicts as usize));
    let cleaned = renumber_groups(&working);
    if is_feasible(inst, &cleaned) {
        cleaned
    } else {
        eprintln!(
            "warning: local search could not reach feasibility (objective: {:?}, conflicts: {:?}), returning its input",
            objective(&cleaned), conflicts(inst, &cleaned)
        );
        assignment.clone()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::greedy_init::greedy_initial;

    fn cycle4() -> Instance { Instance::new(4, &[(0,1),(1,2),(2,3),(3,0)]) }

    #[test]
    fn test_local_search_is_deterministic() {
        let inst = Instance::new(6, &[(0,1),(1,2),(2,3),(3,4),(4,5),(5,0),(1,4)]);
        let start = greedy_initial(&inst, 3);
        assert_eq!(
            local_search(&inst, &start, DEFAULT_NB_PASSES, 7),
            local_search(&inst, &start, DEFAULT_NB_PASSES, 7)
        );
    }

    #[test]
    fn test_conflicts_never_increase() {
        let inst = cycle4();
        // one conflicting pair: (0,1) share a group
        let start:Assignment = vec![Some(0),Some(0),Some(1),Some(0)];
        for seed in 0..10 {
            let improved = local_search(&inst, &start, DEFAULT_NB_PASSES, seed);
            assert!(conflicts(&inst, &improved) <= conflicts(&inst, &start), "seed {}", seed);
        }
    }

    #[test]
    fn test_feasible_input_objective_never_increases() {
        let inst = cycle4();
        // feasible but wasteful: one group per vertex
        let start:Assignment = vec![Some(0),Some(1),Some(2),Some(3)];
        for seed in 0..10 {
            let improved = local_search(&inst, &start, DEFAULT_NB_PASSES, seed);
            assert!(is_feasible(&inst, &improved), "seed {}", seed);
            assert!(objective(&improved) <= objective(&start), "seed {}", seed);
        }
    }

    #[test]
    fn test_reaches_two_groups_on_cycle4() {
        let inst = cycle4();
        let start:Assignment = vec![Some(0),Some(1),Some(2),Some(3)];
        let improved = local_search(&inst, &start, DEFAULT_NB_PASSES, 0);
        assert_eq!(objective(&improved), Some(2));
    }

    #[test]
    fn test_result_is_contiguous() {
        let inst = Instance::new(5, &[(0,1),(1,2),(2,3),(3,4)]);
        let start:Assignment = vec![Some(4),Some(2),Some(4),Some(2),Some(4)];
        let improved = local_search(&inst, &start, DEFAULT_NB_PASSES, 1);
        assert_eq!(improved, renumber_groups(&improved));
    }

    #[test]
    fn test_incomplete_input_returned_unchanged() {
        let inst = cycle4();
        let start:Assignment = vec![Some(0),None,Some(1),None];
        assert_eq!(local_search(&inst, &start, DEFAULT_NB_PASSES, 0), start);
    }

    #[test]
    fn test_zero_passes_only_renumbers() {
        let inst = cycle4();
        let start:Assignment = vec![Some(3),Some(1),Some(3),Some(1)];
        assert_eq!(
            local_search(&inst, &start, 0, 0),
            vec![Some(0),Some(1),Some(0),Some(1)]
        );
    }
}
