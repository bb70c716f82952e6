//! Search procedures for the grouping problem.

/// randomized greedy construction
pub mod greedy_init;

/// first-improvement local search
pub mod local_search;

/// random-move perturbation
pub mod perturbation;

/// iterated local search controller
pub mod ils;
