use clap::{Parser, Subcommand};
use std::cmp::Ordering;
use std::path::PathBuf;

use boligscore::property::Property;
use boligscore::scoring::{Criterion, Evaluation, Thresholds, Weights};
use boligscore::storage::Catalog;

const EXIT_SUCCESS: i32 = 0;
const EXIT_STORAGE: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// List properties ranked by total score (default if no subcommand)
    List {
        /// Output tab-separated values for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// Show the full per-criterion breakdown for one property
    Show {
        /// Index number of the property (1-based, as shown in list)
        index: usize,
    },
    /// Add a property from a YAML file
    Add {
        /// Path to a YAML file describing the property
        file: PathBuf,
    },
    /// Remove a property from the catalog
    Remove {
        /// Index number of the property to remove (1-based, as shown in list)
        index: usize,
    },
    /// Print the weight table
    Weights,
    /// Set the weight for one criterion
    SetWeight {
        /// Criterion id (as shown by `weights`)
        criterion: String,
        /// New non-negative weight; 0 excludes the criterion from totals
        value: u32,
    },
    /// Restore the default weight table
    ResetWeights,
    /// Open a property's listing link in the browser
    Open {
        /// Index number of the property to open (1-based, as shown in list)
        index: usize,
    },
}

#[derive(Parser, Debug)]
#[command(name = "boligscore")]
#[command(about = "Property catalog and weighted-scoring ranker", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/boligscore/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Evaluate every property and sort by total score descending; ties go to
/// the cheaper property. This ordering defines the 1-based indices the
/// index-taking subcommands refer to.
fn ranked<'a>(
    catalog: &'a Catalog,
    weights: &Weights,
    thresholds: &Thresholds,
) -> Vec<(&'a Property, Evaluation)> {
    let mut scored: Vec<_> = catalog
        .properties
        .iter()
        .map(|p| (p, boligscore::scoring::evaluate(p, weights, thresholds)))
        .collect();
    scored.sort_by(|a, b| {
        let score_cmp = b.1.total_score.cmp(&a.1.total_score);
        if score_cmp != Ordering::Equal {
            return score_cmp;
        }
        a.0.price.partial_cmp(&b.0.price).unwrap_or(Ordering::Equal)
    });
    scored
}

fn checked_index<T>(index: usize, items: &[T]) -> Option<&T> {
    if index >= 1 && index <= items.len() {
        Some(&items[index - 1])
    } else {
        None
    }
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List { tsv: false });

    // Load config and resolve the threshold table
    let config_path = cli.config.map(PathBuf::from);
    let config = match boligscore::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let thresholds = config.scoring.unwrap_or_default();
    if let Err(errors) = boligscore::scoring::validate_thresholds(&thresholds) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Load persisted state
    let weights_path = boligscore::storage::get_weights_path();
    let weights = match boligscore::storage::load_weights(&weights_path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Storage error: {}", e);
            std::process::exit(EXIT_STORAGE);
        }
    };

    let catalog_path = boligscore::storage::get_catalog_path();
    let mut catalog = match boligscore::storage::load_catalog(&catalog_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Storage error: {}", e);
            std::process::exit(EXIT_STORAGE);
        }
    };

    if cli.verbose {
        eprintln!("Loaded {} properties from {}", catalog.properties.len(), catalog_path.display());
    }

    match command {
        Commands::List { tsv } => {
            let scored = ranked(&catalog, &weights, &thresholds);
            let scored_refs: Vec<boligscore::output::ScoredProperty> = scored
                .iter()
                .map(|(property, evaluation)| boligscore::output::ScoredProperty {
                    property,
                    evaluation,
                })
                .collect();

            if tsv {
                let output = boligscore::output::format_tsv(&scored_refs);
                if !output.is_empty() {
                    println!("{}", output);
                }
            } else {
                let use_colors = boligscore::output::should_use_colors();
                println!("{}", boligscore::output::format_scored_table(&scored_refs, use_colors));
            }
        }
        Commands::Show { index } => {
            let scored = ranked(&catalog, &weights, &thresholds);
            let Some((property, evaluation)) = checked_index(index, &scored) else {
                eprintln!("Invalid index {}. Must be between 1 and {}.", index, scored.len());
                std::process::exit(EXIT_USAGE);
            };
            let use_colors = boligscore::output::should_use_colors();
            println!(
                "{}",
                boligscore::output::format_property_detail(property, evaluation, &weights, use_colors)
            );
        }
        Commands::Add { file } => {
            let content = match std::fs::read_to_string(&file) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", file.display(), e);
                    std::process::exit(EXIT_USAGE);
                }
            };
            let mut property: Property = match serde_saphyr::from_str(&content) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Failed to parse property file {}: {}", file.display(), e);
                    std::process::exit(EXIT_USAGE);
                }
            };
            property.id = uuid::Uuid::new_v4();

            catalog.add(property);
            catalog.rescore(&weights, &thresholds);
            if let Err(e) = boligscore::storage::save_catalog(&catalog_path, &catalog) {
                eprintln!("Storage error: {}", e);
                std::process::exit(EXIT_STORAGE);
            }

            let added = &catalog.properties[0];
            println!(
                "Added {} (total score {})",
                added.address,
                added.total_score.unwrap_or(0)
            );
        }
        Commands::Remove { index } => {
            let id = {
                let scored = ranked(&catalog, &weights, &thresholds);
                let Some((property, _)) = checked_index(index, &scored) else {
                    eprintln!("Invalid index {}. Must be between 1 and {}.", index, scored.len());
                    std::process::exit(EXIT_USAGE);
                };
                property.id
            };

            catalog.remove(id);
            if let Err(e) = boligscore::storage::save_catalog(&catalog_path, &catalog) {
                eprintln!("Storage error: {}", e);
                std::process::exit(EXIT_STORAGE);
            }
            println!("Removed property {}.", index);
        }
        Commands::Weights => {
            println!("{}", boligscore::output::format_weights_table(&weights));
        }
        Commands::SetWeight { criterion, value } => {
            let criterion: Criterion = match criterion.parse() {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_USAGE);
                }
            };
            if let Some(max) = criterion.definition().max_weight {
                if value > max && cli.verbose {
                    eprintln!(
                        "Note: {} is above the suggested maximum of {} for {}",
                        value,
                        max,
                        criterion.id()
                    );
                }
            }

            let mut weights = weights;
            weights.set(criterion, value);
            if let Err(e) = boligscore::storage::save_weights(&weights_path, &weights) {
                eprintln!("Storage error: {}", e);
                std::process::exit(EXIT_STORAGE);
            }

            // Weight changes rescore every property, not just new ones
            catalog.rescore(&weights, &thresholds);
            if let Err(e) = boligscore::storage::save_catalog(&catalog_path, &catalog) {
                eprintln!("Storage error: {}", e);
                std::process::exit(EXIT_STORAGE);
            }
            println!("Set {} = {}.", criterion.id(), value);
        }
        Commands::ResetWeights => {
            let weights = Weights::default();
            if let Err(e) = boligscore::storage::save_weights(&weights_path, &weights) {
                eprintln!("Storage error: {}", e);
                std::process::exit(EXIT_STORAGE);
            }
            catalog.rescore(&weights, &thresholds);
            if let Err(e) = boligscore::storage::save_catalog(&catalog_path, &catalog) {
                eprintln!("Storage error: {}", e);
                std::process::exit(EXIT_STORAGE);
            }
            println!("Weights reset to defaults.");
        }
        Commands::Open { index } => {
            let scored = ranked(&catalog, &weights, &thresholds);
            let Some((property, _)) = checked_index(index, &scored) else {
                eprintln!("Invalid index {}. Must be between 1 and {}.", index, scored.len());
                std::process::exit(EXIT_USAGE);
            };
            let Some(link) = &property.listing_link else {
                eprintln!("Property {} has no listing link.", index);
                std::process::exit(EXIT_USAGE);
            };
            if let Err(e) = boligscore::browser::open_url(link) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_USAGE);
            }
            println!("Opening {} in browser: {}", property.address, link);
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
