use anyhow::Result;
use transaction_graph::{generator, GraphBuilder, GraphOptions};
use transaction_graph::utils::transaction_parser::read_transactions;
use std::path::PathBuf;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::io::Write;

// Simple CLI without clap
fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let level = if args.iter().any(|arg| arg == "--verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|elapsed| elapsed.as_secs())
                    .unwrap_or_default(),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .init();

    // Check for --version command
    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Transaction Graph v{}", transaction_graph::VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        println!("Transaction Graph v{}", transaction_graph::VERSION);
        println!("\nUsage:");
        println!("  {} <INPUT.json> [--output PATH] [--placeholder] [--text] [--verbose]", args[0]);
        println!("  {} --version", args[0]);
        println!("\nOptions:");
        println!("  --output, -o PATH    Save the graph as JSON to the specified file path");
        println!("  --placeholder        Append an empty trailing column");
        println!("  --text, -t           Print a plain text summary instead of JSON");
        println!("  --verbose            Enable debug logging");
        println!("  --version, -v        Show version information");
        return Ok(());
    }

    let input_path = PathBuf::from(&args[1]);

    // Parse optional arguments
    let mut output_path = None;
    let mut options = GraphOptions::default();
    let mut text = false;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                if i + 1 < args.len() {
                    output_path = Some(PathBuf::from(&args[i + 1]));
                    i += 2;
                } else {
                    println!("Error: Missing value for --output");
                    return Ok(());
                }
            },
            "--placeholder" => {
                options.include_placeholder = true;
                i += 1;
            },
            "--text" | "-t" => {
                text = true;
                i += 1;
            },
            "--verbose" => {
                i += 1;
            },
            _ => {
                println!("Unknown argument: {}", args[i]);
                i += 1;
            }
        }
    }

    info!("Reading transactions from {}", input_path.display());
    let transactions = read_transactions(&input_path)?;
    let graph = GraphBuilder::with_options(options).build(&transactions)?;

    if let Some(path) = &output_path {
        generator::save_graph(&graph, path)?;
        println!("Saved to: {}", path.display());
    }

    if text {
        print!("{}", generator::to_text(&graph));
    } else if output_path.is_none() {
        println!("{}", generator::to_json(&graph)?);
    }

    Ok(())
}
