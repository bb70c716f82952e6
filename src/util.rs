use clap::ArgMatches;
use serde_json::json;

use crate::instance::Instance;
use crate::eval::to_groups;
use crate::search::ils::{IlsConfig, IlsResult};

/** reads command line input and returns the instance name, the instance and
the ILS configuration, plus the optional solution/perf output filenames.

# Panics
 - if a numeric argument cannot be parsed
*/
pub fn read_params(main_args:&ArgMatches) -> (String, Instance, IlsConfig, Option<String>, Option<String>) {
    let inst_filename = main_args.value_of("instance").unwrap();
    let nb_iterations:usize = main_args.value_of("iterations").unwrap().parse::<usize>()
        .expect("unable to parse the number of iterations");
    let seed:u64 = main_args.value_of("seed").unwrap().parse::<u64>()
        .expect("unable to parse the random seed");
    let strength:usize = main_args.value_of("strength").unwrap().parse::<usize>()
        .expect("unable to parse the perturbation strength");
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read instance file
    println!("reading instance: {}...", inst_filename);
    let instance = Instance::from_file(inst_filename);
    instance.display_statistics();
    println!("=======================");
    let mut config = IlsConfig::new(nb_iterations, seed);
    config.strength = strength;
    (inst_filename.to_string(), instance, config, sol_file, perf_file)
}

/// exports search results to files
pub fn export_results(
    instance:&Instance,
    result:&IlsResult,
    inst_name:&str,
    perf_file:Option<String>,
    sol_file:Option<String>,
) {
    // export statistics
    if let Some(filename) = perf_file {
        let stats = json!({
            "primal_list": result.trajectory.iter().map(|r| r.objective).collect::<Vec<usize>>(),
            "trajectory": result.trajectory,
            "nb_iterations": result.nb_iterations,
            "time_searched": result.elapsed,
            "feasible": result.feasible,
            "inst_name": inst_name,
        });
        let mut file = match std::fs::File::create(filename.as_str()) {
            Err(why) => panic!("couldn't create {}: {}", filename, why),
            Ok(file) => file
        };
        if let Err(why) = std::io::Write::write(
            &mut file, serde_json::to_string(&stats).unwrap().as_bytes()
        ) { panic!("couldn't write: {}", why) };
    }
    // export solution
    if let Some(filename) = sol_file {
        if !result.feasible {
            println!("exported solution is infeasible (conflicts: {:?})", result.nb_conflicts);
        }
        instance.write_solution(filename.as_str(), &to_groups(&result.best));
    }
}
