use std::path::{Path, PathBuf};

use clap::Parser;

use buylist_planner::{
    format_section_report, match_offers, missing_cards, plan_buylist, rank_sellers,
    read_inventory_set, read_want_list, InventorySet,
};

/// Compares your deck lists against seller inventories and plans which
/// sellers to buy from.
#[derive(Parser, Debug)]
#[command(name = "buylist_planner")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing Mainboard.txt and Considering.txt
    #[arg(short, long, default_value = "Your deck")]
    deck_dir: PathBuf,

    /// Directory containing one inventory file per seller
    #[arg(short, long, default_value = "Sellers")]
    sellers_dir: PathBuf,
}

fn report_section(path: &Path, sellers: &InventorySet) -> Result<(), Box<dyn std::error::Error>> {
    let wants = read_want_list(path)?;
    let table = match_offers(sellers, &wants);
    let gaps = missing_cards(&wants, &table);
    let ranking = rank_sellers(sellers, &table);
    let plan = plan_buylist(&table, sellers)?;

    print!("{}", format_section_report(&wants, &table, &gaps, &ranking, &plan));
    println!("\n");
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let sellers = read_inventory_set(&args.sellers_dir)?;

    let mainboard = args.deck_dir.join("Mainboard.txt");
    report_section(&mainboard, &sellers)?;

    // The Considering section is optional.
    let considering = args.deck_dir.join("Considering.txt");
    if considering.exists() {
        report_section(&considering, &sellers)?;
    } else {
        log::info!("no Considering.txt in {}, skipping", args.deck_dir.display());
    }

    Ok(())
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting buylist planner");

    if let Err(e) = run(&args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
