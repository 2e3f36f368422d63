use std::{env, io, path::Path, process};

use ledger_insights::{
    aggregate_with,
    analytics::{summary_text, summary_tiles},
    config::{Config, ConfigManager},
    init,
    utils::{build_info, persistence},
    TransactionDocument,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let command = args.next().unwrap_or_else(|| usage_and_exit());

    match command.as_str() {
        "analyze" => {
            let config = load_config()?;
            let document = read_input(args.next())?;
            let report = aggregate_with(&document.transactions, &config.limits);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "summary" => {
            let config = load_config()?;
            let document = read_input(args.next())?;
            let report = aggregate_with(&document.transactions, &config.limits);
            let formatter = config.formatter();
            println!("{}", summary_text(&report, &formatter));
            for tile in summary_tiles(&report) {
                let value = formatter.format(tile.value);
                match tile.detail {
                    Some(detail) => println!("{:<17}{} ({})", tile.label, value, detail),
                    None => println!("{:<17}{}", tile.label, value),
                }
            }
        }
        "timeline" => {
            let config = load_config()?;
            let document = read_input(args.next())?;
            let report = aggregate_with(&document.transactions, &config.limits);
            let formatter = config.formatter();
            for bucket in &report.timeline {
                println!(
                    "{}  {:>14}  {:>14}",
                    bucket.date,
                    formatter.format(bucket.income),
                    formatter.format(bucket.debit)
                );
            }
        }
        "config" => {
            let config = load_config()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        "version" => {
            println!("{}", build_info::current().describe());
        }
        _ => usage_and_exit(),
    }

    Ok(())
}

fn load_config() -> ledger_insights::Result<Config> {
    ConfigManager::from_env()?.load()
}

fn read_input(source: Option<String>) -> ledger_insights::Result<TransactionDocument> {
    match source.as_deref() {
        None | Some("-") => persistence::read_document(io::stdin().lock()),
        Some(path) => persistence::load_document(Path::new(path)),
    }
}

fn usage_and_exit() -> ! {
    print_usage();
    process::exit(1);
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  ledger_insights_cli analyze [FILE|-]    print the aggregation report as JSON");
    eprintln!("  ledger_insights_cli summary [FILE|-]    print the summary sentence and tiles");
    eprintln!("  ledger_insights_cli timeline [FILE|-]   print per-day income and debits");
    eprintln!("  ledger_insights_cli config              print the effective configuration");
    eprintln!("  ledger_insights_cli version             print build information");
}
