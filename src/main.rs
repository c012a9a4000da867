/*

    Re-bound axis aligned boxes after affine transformations
    given in a JSON file, and print the results as JSON.

    Usage: bounds <filename>.json

    @date: 19 Oct, 2026

*/

use std::env;
use tracing::{info, warn, error, debug};
use tracing_subscriber;

use bound_box::json_parser::parse_bounds_json;

fn main() -> Result<(), Box<dyn std::error::Error>> {

    // Logging on console
    tracing_subscriber::fmt::init();

    // Parse args
    let args: Vec<String> = env::args().collect();
    let json_path: &String = if args.len() == 1 {
        warn!("No arguments were provided, setting default input path...");
        &String::from("./inputs/rotated_unit_box.json")
    } else if args.len() == 2 {
        &args[1]
    } else {
        error!("Usage: {} <filename>.json", args[0]);
        std::process::exit(1);
    };

    // Parse JSON
    info!("Loading bounds from {}...", json_path);
    let root = parse_bounds_json(json_path).map_err(|e| {
        error!("Failed to load bounds: {}", e);
        e
    })?;
    debug!("Bounds document loaded.\n {:#?}", root);

    let report = root.bounds.evaluate_all();
    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Finished execution.");
    Ok(())
}
