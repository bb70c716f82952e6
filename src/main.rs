//! ILS solver executable for the conflict-grouping (graph coloring) problem.

use clap::{App, load_yaml};

use ils_color::util::{read_params, export_results};
use ils_color::search::ils::iterated_local_search;

/** reads an instance and the search parameters, runs the iterated local
search, and exports the results. */
pub fn main() {
    // parse arguments
    let yaml = load_yaml!("main_args.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let (inst_name, instance, config, sol_file, perf_file) = read_params(&main_args);
    println!("ILS iterations: {}", config.nb_iterations);
    println!("base random seed: {}", config.seed);
    println!("perturbation strength: {}", config.strength);
    // solve it
    let result = iterated_local_search(&instance, &config);
    // export results
    export_results(&instance, &result, &inst_name, perf_file, sol_file);
}
