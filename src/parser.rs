use std::fs;

use nom::IResult;
use nom::character::complete::{digit1, multispace0, space1};

use crate::instance::VertexId;

/** reads an instance file, returns (n, m, edges).

format: the first line contains `n m` (number of vertices and number of
edges); each following line contains a 1-indexed edge pair. Edges are
returned 0-indexed; duplicates are kept (the instance constructor
deduplicates them).

# Panics
 - if the file cannot be read or does not follow the format
*/
pub fn read_from_file(filename:&str) -> (usize, usize, Vec<(VertexId,VertexId)>) {
    let s1 = fs::read_to_string(filename)
        .unwrap_or_else(|_| panic!("Instance: unable to read file {}", filename))
        .replace('\r',"");
    let (mut s2,(n,m)) = read_two_integers(s1.as_str())
        .unwrap_or_else(|_| panic!("Instance: invalid header in {}", filename));
    let mut edges:Vec<(VertexId,VertexId)> = Vec::with_capacity(m);
    while let Ok((tmp,(a,b))) = read_two_integers(s2) {
        s2 = tmp;
        assert!(a >= 1 && b >= 1, "edge endpoints are 1-indexed, got ({},{})", a, b);
        edges.push((a-1, b-1));
    }
    assert!(
        s2.trim().is_empty(),
        "Instance: trailing garbage in {}: {:?}", filename, s2.lines().next()
    );
    assert!(
        edges.len() == m || edges.len() == 2*m,
        "check: {}\t m: {}", edges.len(), m
    );
    (n, m, edges)
}

/// reads two numbers separated by spaces (leading/trailing blank lines allowed)
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    let (s,_) = multispace0(s)?;
    let (s,n1) = digit1(s)?;
    let (s,_) = space1(s)?;
    let (s,n2) = digit1(s)?;
    let (s,_) = multispace0(s)?;
    Ok((s, (n1.parse::<usize>().unwrap(), n2.parse::<usize>().unwrap())))
}
