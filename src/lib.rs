//! Iterated Local Search for the conflict-grouping problem (graph coloring):
//! partition entities into as few groups as possible so that no two entities
//! joined by a conflict edge share a group.

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// immutable conflict-graph instance
pub mod instance;

/// instance file reader
pub mod parser;

/// assignment encoding, objective/conflict evaluation and renumbering
pub mod eval;

/// helper and utility methods for executables
pub mod util;

/// search procedures (construction, local search, perturbation, ILS)
pub mod search;
