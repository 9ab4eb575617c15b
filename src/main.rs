use anyhow::Result;
use log::{error, info};
use std::path::Path;
use upload_namer::config::Config;
use upload_namer::naming_processor::NamingProcessor;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    match args.len() {
        1 => process_all_batches(),
        3 => {
            let input_path = Path::new(&args[1]);
            let output_path = Path::new(&args[2]);
            if input_path.is_dir() {
                NamingProcessor::process_directory(input_path, output_path)
            } else {
                NamingProcessor::process_batch(input_path, output_path)
            }
        }
        _ => {
            eprintln!("Usage: {} [<input_json_or_dir> <output_json_path>]", args[0]);
            std::process::exit(1);
        }
    }
}

fn process_all_batches() -> Result<()> {
    let config = Config::new()?;
    for (name, input_path, output_path) in config.get_batch_paths()? {
        if !input_path.exists() {
            info!("Skipping {}: no {}", name, input_path.display());
            continue;
        }
        NamingProcessor::process_batch(&input_path, &output_path)?;
    }
    Ok(())
}
