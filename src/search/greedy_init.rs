use std::cmp::Reverse;

use fastrand::Rng;

use crate::instance::{Instance, VertexId, GroupId};
use crate::eval::Assignment;

/** builds an initial assignment with a randomized greedy:
 1. order vertices by decreasing degree (the most constrained first; ties
    broken by a seed-dependent shuffle, the sort being stable)
 2. for each vertex, scan the already-opened groups in random order and take
    the first one containing none of its neighbors
 3. if no opened group fits, open a new one

The result is feasible by construction and its group ids are contiguous
(groups are opened in increasing order, never skipped).
*/
pub fn greedy_initial(inst:&Instance, seed:u64) -> Assignment {
    let rng = Rng::with_seed(seed);
    let n = inst.nb_vertices();
    let mut order:Vec<VertexId> = (0..n).collect();
    rng.shuffle(&mut order);
    order.sort_by_key(|v| Reverse(inst.degree(*v)));
    let mut assignment:Assignment = vec![None ; n];
    let mut nb_groups:usize = 0;
    for v in order {
        let mut open_groups:Vec<GroupId> = (0..nb_groups).collect();
        rng.shuffle(&mut open_groups);
        let chosen = open_groups.into_iter().find(|g|
            inst.neighbors(v).iter().all(|neigh| assignment[*neigh] != Some(*g))
        );
        match chosen {
            Some(g) => { assignment[v] = Some(g); }
            None => { // no opened group fits: open a new one
                assignment[v] = Some(nb_groups);
                nb_groups += 1;
            }
        }
    }
    assignment
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{is_feasible, objective, renumber_groups};

    #[test]
    fn test_construction_is_feasible() {
        let inst = Instance::new(4, &[(0,1),(1,2),(2,3),(3,0)]);
        for seed in 0..20 {
            let assignment = greedy_initial(&inst, seed);
            assert!(is_feasible(&inst, &assignment), "seed {}", seed);
        }
    }

    #[test]
    fn test_construction_is_deterministic() {
        let inst = Instance::new(6, &[(0,1),(1,2),(2,3),(3,4),(4,5),(5,0),(0,3)]);
        assert_eq!(greedy_initial(&inst, 42), greedy_initial(&inst, 42));
    }

    #[test]
    fn test_triangle_needs_three_groups() {
        let inst = Instance::new(3, &[(0,1),(1,2),(0,2)]);
        let assignment = greedy_initial(&inst, 0);
        assert!(is_feasible(&inst, &assignment));
        assert_eq!(objective(&assignment), Some(3));
    }

    #[test]
    fn test_no_edges_single_group() {
        let inst = Instance::new(5, &[]);
        let assignment = greedy_initial(&inst, 0);
        assert_eq!(assignment, vec![Some(0) ; 5]);
    }

    #[test]
    fn test_construction_is_contiguous() {
        let inst = Instance::new(5, &[(0,1),(1,2),(2,3),(3,4),(4,0),(0,2)]);
        for seed in 0..10 {
            let assignment = greedy_initial(&inst, seed);
            assert_eq!(assignment, renumber_groups(&assignment), "seed {}", seed);
        }
    }
}
