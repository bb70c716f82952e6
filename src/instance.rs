use std::fs;

use bit_set::BitSet;

use crate::parser::read_from_file;

/** Vertex Id */
pub type VertexId = usize;

/** Group Id (one partition bucket entities are assigned to) */
pub type GroupId = usize;

/** models a conflict-graph instance: vertices are entities, edges join
pairs that cannot share a group. */
#[derive(Debug)]
pub struct Instance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph (u < v, deduplicated)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl Instance {

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// list of vertices adjacent to vertex i
    pub fn neighbors(&self, i:VertexId) -> &[VertexId] {
        &self.adj_list[i]
    }

    /// degree of vertex i
    pub fn degree(&self, i:VertexId) -> usize { self.adj_list[i].len() }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// returns true if a and b are adjacent (O(1) through the adjacency matrix)
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        self.adj_matrix[a].contains(b)
    }

    /** constructor from a raw edge list (possibly unordered, possibly with
    duplicates). Self-loops are rejected.

    # Panics
     - if an edge endpoint is out of `[0,n)` or a self-loop
    */
    pub fn new(n:usize, raw_edges:&[(VertexId,VertexId)]) -> Self {
        let mut edges:Vec<(VertexId,VertexId)> = raw_edges.iter().map(|&(a,b)| {
            assert!(a != b, "self-loop ({},{})", a, b);
            assert!(a < n && b < n, "edge ({},{}) out of range (n={})", a, b, n);
            if a < b { (a,b) } else { (b,a) }
        }).collect();
        edges.sort_unstable();
        edges.dedup();
        let m = edges.len();
        let mut adj_list = vec![Vec::new() ; n];
        for &(a,b) in &edges {
            adj_list[a].push(b);
            adj_list[b].push(a);
        }
        let mut adj_matrix = vec![BitSet::default() ; n];
        for (a,row) in adj_matrix.iter_mut().enumerate() {
            for b in &adj_list[a] {
                row.insert(*b);
            }
        }
        Self { n, m, edges, adj_list, adj_matrix }
    }

    /// creates an instance from an instance file
    pub fn from_file(filename:&str) -> Self {
        let (n,_,edges) = read_from_file(filename);
        Self::new(n, &edges)
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        if self.n > 0 {
            let degrees:Vec<usize> = (0..self.nb_vertices()).map(|i| self.degree(i)).collect();
            println!("\t{} \t min degree", degrees.iter().min().unwrap());
            println!("\t{} \t max degree", degrees.iter().max().unwrap());
        }
    }

    /** writes a grouping into a file. Each line corresponds to a group and
    lists its members. */
    pub fn write_solution(&self, filename:&str, groups:&[Vec<VertexId>]) {
        fs::write(filename, self.solution_to_string(groups))
            .unwrap_or_else(|_|
                panic!("write_solution: unable to write the solution in {}", filename)
            );
    }

    /** writes a string encoding the grouping (use this to export the solution) */
    pub fn solution_to_string(&self, groups:&[Vec<VertexId>]) -> String {
        let mut res = String::default();
        for e in groups {
            for v in e {
                res += format!("{} ", v).as_str();
            }
            res += "\n";
        }
        res
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_instance() {
        let inst = Instance::new(4, &[(0,1),(1,2),(2,3),(3,0)]);
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), &[1,3]);
        assert!(inst.are_adjacent(0,1));
        assert!(!inst.are_adjacent(0,2));
    }

    #[test]
    fn test_duplicate_edges_removed() {
        let inst = Instance::new(3, &[(0,1),(1,0),(0,1),(1,2)]);
        assert_eq!(inst.nb_edges(), 2);
        assert_eq!(inst.degree(1), 2);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::new(0, &[]);
        assert_eq!(inst.nb_vertices(), 0);
        assert_eq!(inst.nb_edges(), 0);
    }

    #[test]
    fn test_read_instance() {
        let inst = Instance::from_file("insts/cycle4.txt");
        assert_eq!(inst.nb_vertices(), 4);
        assert_eq!(inst.nb_edges(), 4);
        assert_eq!(inst.neighbors(0), &[1,3]);
    }
}
