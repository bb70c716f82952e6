use std::time::Instant;

use serde::Serialize;

use crate::instance::{Instance, GroupId};
use crate::eval::{Assignment, objective, conflicts, is_feasible};
use crate::search::greedy_init::greedy_initial;
use crate::search::local_search::{local_search, DEFAULT_NB_PASSES};
use crate::search::perturbation::perturb;

/// default number of vertices moved by each perturbation
pub const DEFAULT_STRENGTH:usize = 5;

/** parameters of an ILS run. Together with the instance they fully
determine the search trajectory. */
#[derive(Debug, Clone)]
pub struct IlsConfig {
    /// number of perturb+improve iterations
    pub nb_iterations: usize,
    /// perturbation strength (nb vertices moved per iteration)
    pub strength: usize,
    /// base random seed (iteration i uses seed + 1 + i)
    pub seed: u64,
    /// cap on the local-search outer passes
    pub ls_max_passes: usize,
    /// if set, restart each iteration from the best known assignment instead
    /// of the latest candidate
    pub revert_to_best: bool,
}

impl IlsConfig {
    /// configuration with the default strength and local-search cap
    pub fn new(nb_iterations:usize, seed:u64) -> Self {
        Self {
            nb_iterations,
            strength: DEFAULT_STRENGTH,
            seed,
            ls_max_passes: DEFAULT_NB_PASSES,
            revert_to_best: false,
        }
    }
}

/// a new best assignment found during the search
#[derive(Debug, Clone, Serialize)]
pub struct BestRecord {
    /// seconds elapsed since the start of the run
    pub elapsed: f32,
    /// number of groups of the recorded assignment
    pub objective: usize,
    /// the recorded assignment (complete, hence flattened)
    pub assignment: Vec<GroupId>,
}

/// outcome of an ILS run
#[derive(Debug, Serialize)]
pub struct IlsResult {
    /// best assignment found
    pub best: Assignment,
    /// number of groups of the best assignment (None if incomplete)
    pub objective: Option<usize>,
    /// feasibility of the best assignment
    pub feasible: bool,
    /// conflicting edges of the best assignment (diagnostic; 0 when feasible)
    pub nb_conflicts: Option<usize>,
    /// number of ILS iterations performed
    pub nb_iterations: usize,
    /// total elapsed seconds
    pub elapsed: f32,
    /// every accepted best, including the initial one
    pub trajectory: Vec<BestRecord>,
}

/** acceptance criterion for the global best: strict improvement only
(None plays the role of +infinity). */
pub fn accepts(candidate_objective:Option<usize>, best_objective:Option<usize>) -> bool {
    match (candidate_objective, best_objective) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(c), Some(b)) => c < b,
    }
}

fn flatten(assignment:&Assignment) -> Vec<GroupId> {
    assignment.iter().flatten().copied().collect()
}

/** runs the iterated local search:
 1. construct an initial assignment (randomized greedy)
 2. improve it; the result becomes both `best` and `current`
 3. repeat `nb_iterations` times: perturb `current`, improve the result,
    promote it to `best` if feasible and strictly better, and (unless
    `revert_to_best` is set) make it the new `current` regardless

Each iteration reseeds the perturbation and the local search with an
incremented seed, so a run is replayable from (instance, config) alone.
*/
pub fn iterated_local_search(inst:&Instance, config:&IlsConfig) -> IlsResult {
    let start_time = Instant::now();
    let base_seed = config.seed;
    let mut trajectory:Vec<BestRecord> = Vec::new();
    println!("{:<10} {:<10} assignment", "elapsed", "groups");

    // construction
    let s0 = greedy_initial(inst, base_seed);
    println!("{:<10.2} {:<10} {:?} (constructed)",
        start_time.elapsed().as_secs_f32(),
        objective(&s0).map_or(-1, |o| o as i64),
        flatten(&s0)
    );

    // initial improvement
    let mut best = local_search(inst, &s0, config.ls_max_passes, base_seed);
    if !is_feasible(inst, &best) {
        eprintln!(
            "warning: initial local search left an infeasible assignment (objective: {:?}, conflicts: {:?}); keeping the constructed one",
            objective(&best), conflicts(inst, &best)
        );
        best = s0;
    }
    let mut best_objective = objective(&best);
    if let Some(o) = best_objective {
        let record = BestRecord {
            elapsed: start_time.elapsed().as_secs_f32(),
            objective: o,
            assignment: flatten(&best),
        };
        println!("{:<10.2} {:<10} {:?}", record.elapsed, record.objective, record.assignment);
        trajectory.push(record);
    }
    let mut current = best.clone();

    // perturb + improve loop
    for i in 0..config.nb_iterations {
        let iter_seed = base_seed.wrapping_add(1 + i as u64);
        let perturbed = perturb(inst, &current, config.strength, iter_seed);
        let candidate = local_search(inst, &perturbed, config.ls_max_passes, iter_seed);
        let candidate_objective = objective(&candidate);
        let candidate_feasible = is_feasible(inst, &candidate);
        if !candidate_feasible {
            eprintln!(
                "it {}: warning - candidate is infeasible (objective: {:?}, conflicts: {:?}); kept as exploration base only",
                i, candidate_objective, conflicts(inst, &candidate)
            );
        }
        let accepted = candidate_feasible && accepts(candidate_objective, best_objective);
        if accepted {
            best = candidate.clone();
            best_objective = candidate_objective;
            let record = BestRecord {
                elapsed: start_time.elapsed().as_secs_f32(),
                objective: best_objective.unwrap_or(0),
                assignment: flatten(&best),
            };
            println!("{:<10.2} {:<10} {:?}", record.elapsed, record.objective, record.assignment);
            trajectory.push(record);
        }
        // the exploration base always advances to the latest local optimum
        // (unless configured to fall back on the best known one)
        current = if !accepted && config.revert_to_best { best.clone() } else { candidate };
    }

    let elapsed = start_time.elapsed().as_secs_f32();
    let feasible = is_feasible(inst, &best);
    let nb_conflicts = conflicts(inst, &best);
    println!("\nILS finished after {} iterations.", config.nb_iterations);
    println!("total time: {:.2} seconds", elapsed);
    println!("best assignment: {:?}", flatten(&best));
    println!("best objective (groups): {:?}", best_objective);
    println!("feasible: {}", feasible);
    if !feasible {
        println!("conflicts: {:?}", nb_conflicts);
    }
    IlsResult {
        best,
        objective: best_objective,
        feasible,
        nb_conflicts,
        nb_iterations: config.nb_iterations,
        elapsed,
        trajectory,
    }
}
