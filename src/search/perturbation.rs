use std::cmp::max;

use fastrand::Rng;

use crate::instance::{Instance, VertexId, GroupId};
use crate::eval::{Assignment, objective, renumber_groups};

/** perturbs an assignment by reassigning `min(strength, n)` distinct
vertices, drawn uniformly without replacement. Each selected vertex is
offered a random permutation of the opened groups plus one new-group slot
(its own group excluded) and moves to the first target none of its
neighbors occupies at that point of the mutation; if no target qualifies it
stays where it is. Group ids are renumbered before returning.

The result may be infeasible when the input is; repairing is the job of the
following local search, not of this operator.
*/
pub fn perturb(inst:&Instance, assignment:&Assignment, strength:usize, seed:u64) -> Assignment {
    let rng = Rng::with_seed(seed);
    let n = inst.nb_vertices();
    let mut perturbed = assignment.clone();
    // pessimistic group bound if the input is incomplete
    let mut nb_groups = objective(&perturbed).unwrap_or(n);
    let mut vertices:Vec<VertexId> = (0..n).collect();
    rng.shuffle(&mut vertices);
    vertices.truncate(strength.min(n));
    for v in vertices {
        let current_group = perturbed[v];
        let mut targets:Vec<GroupId> = (0..=nb_groups)
            .filter(|g| Some(*g) != current_group).collect();
        rng.shuffle(&mut targets);
        for target in targets {
            if inst.neighbors(v).iter().all(|neigh| perturbed[*neigh] != Some(target)) {
                perturbed[v] = Some(target);
                nb_groups = max(nb_groups, target+1);
                break;
            }
        }
    }
    renumber_groups(&perturbed)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{is_feasible, conflicts};

    fn path5() -> Instance { Instance::new(5, &[(0,1),(1,2),(2,3),(3,4)]) }

    #[test]
    fn test_perturbation_is_deterministic() {
        let inst = path5();
        let assignment:Assignment = vec![Some(0),Some(1),Some(0),Some(1),Some(0)];
        assert_eq!(
            perturb(&inst, &assignment, 3, 11),
            perturb(&inst, &assignment, 3, 11)
        );
    }

    #[test]
    fn test_strength_larger_than_n() {
        let inst = path5();
        let assignment:Assignment = vec![Some(0),Some(1),Some(0),Some(1),Some(0)];
        // must not panic: selects min(strength, n) vertices
        let perturbed = perturb(&inst, &assignment, 1000, 4);
        assert_eq!(perturbed.len(), 5);
    }

    #[test]
    fn test_moves_avoid_neighbor_groups() {
        let inst = path5();
        let assignment:Assignment = vec![Some(0),Some(1),Some(0),Some(1),Some(0)];
        for seed in 0..30 {
            let perturbed = perturb(&inst, &assignment, 2, seed);
            // feasible input stays feasible: only conflict-free moves are taken
            assert_eq!(conflicts(&inst, &perturbed), Some(0), "seed {}", seed);
            assert!(is_feasible(&inst, &perturbed), "seed {}", seed);
        }
    }

    #[test]
    fn test_result_is_contiguous() {
        let inst = path5();
        let assignment:Assignment = vec![Some(0),Some(1),Some(0),Some(1),Some(0)];
        for seed in 0..10 {
            let perturbed = perturb(&inst, &assignment, 3, seed);
            assert_eq!(perturbed, renumber_groups(&perturbed), "seed {}", seed);
        }
    }

    #[test]
    fn test_zero_vertices_instance() {
        let inst = Instance::new(0, &[]);
        assert_eq!(perturb(&inst, &vec![], 5, 0), vec![]);
    }
}
