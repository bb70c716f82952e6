use crate::instance::{Instance, VertexId, GroupId};

/** Solution of a grouping problem: assignment[v] is the group of vertex v,
`None` meaning not assigned yet. */
pub type Assignment = Vec<Option<GroupId>>;

/// returns true if every vertex is assigned a group
pub fn is_complete(assignment:&Assignment) -> bool {
    assignment.iter().all(|e| e.is_some())
}

/** number of groups used by the assignment (max group id + 1).
returns None if the assignment is incomplete ("+infinity": unusable). */
pub fn objective(assignment:&Assignment) -> Option<usize> {
    let mut max_group:usize = 0;
    for e in assignment {
        match e {
            None => return None,
            Some(g) => { if *g+1 > max_group { max_group = *g+1; } }
        }
    }
    Some(max_group)
}

/** number of edges whose endpoints share a group.
returns None if the assignment is incomplete. */
pub fn conflicts(inst:&Instance, assignment:&Assignment) -> Option<usize> {
    if !is_complete(assignment) { return None; }
    let mut nb_conflicts = 0;
    for &(a,b) in inst.edges() {
        if assignment[a] == assignment[b] { nb_conflicts += 1; }
    }
    Some(nb_conflicts)
}

/** returns true iff the assignment is complete and no edge has both
endpoints in the same group. */
pub fn is_feasible(inst:&Instance, assignment:&Assignment) -> bool {
    if assignment.len() != inst.nb_vertices() { return false; }
    conflicts(inst, assignment) == Some(0)
}

/** conflict variation obtained by moving vertex v to new_group, computed by
scanning only the neighbors of v (O(d(v)) instead of O(m)). */
pub fn delta_conflicts(inst:&Instance, assignment:&Assignment, v:VertexId, new_group:GroupId) -> i64 {
    let mut delta:i64 = 0;
    for neigh in inst.neighbors(v) {
        if assignment[*neigh].is_some() && assignment[*neigh] == assignment[v] { delta -= 1; }
        if assignment[*neigh] == Some(new_group) { delta += 1; }
    }
    delta
}

/** renumbers group ids so that they form a contiguous range [0,k), in
first-appearance order over the vertex index. Unassigned entries are kept. */
pub fn renumber_groups(assignment:&Assignment) -> Assignment {
    let max_group = assignment.iter().flatten().max().copied();
    let mut group_map:Vec<Option<GroupId>> = match max_group {
        None => return assignment.clone(),
        Some(g) => vec![None ; g+1]
    };
    let mut next_group:GroupId = 0;
    let mut res:Assignment = vec![None ; assignment.len()];
    for (i,e) in assignment.iter().enumerate() {
        if let Some(old_group) = e {
            if group_map[*old_group].is_none() {
                group_map[*old_group] = Some(next_group);
                next_group += 1;
            }
            res[i] = group_map[*old_group];
        }
    }
    res
}

/** converts an assignment to its partition view (one vector of vertices per
group, groups renumbered contiguously). */
pub fn to_groups(assignment:&Assignment) -> Vec<Vec<VertexId>> {
    let renumbered = renumber_groups(assignment);
    let nb_groups = renumbered.iter().flatten().max().map_or(0, |g| g+1);
    let mut res = vec![Vec::new() ; nb_groups];
    for (i,e) in renumbered.iter().enumerate() {
        if let Some(g) = e { res[*g].push(i); }
    }
    res
}
