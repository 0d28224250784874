use std::path::PathBuf;

use anyhow::{Context as _, anyhow};
use inflect_glosses::{dict, transform};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut input = PathBuf::from("src/_data/nt_greek_dict.json");
    let mut output = PathBuf::from("src/_data/nt_greek-pt_dict.json");
    let mut dry_run = false;
    let mut limit = 5usize;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" => {
                input = PathBuf::from(args.next().ok_or_else(|| anyhow!("--input requires a path"))?);
            }
            "--output" => {
                output =
                    PathBuf::from(args.next().ok_or_else(|| anyhow!("--output requires a path"))?);
            }
            "--dry-run" => dry_run = true,
            "--limit" => {
                limit = args
                    .next()
                    .ok_or_else(|| anyhow!("--limit requires a number"))?
                    .parse()
                    .context("Failed to parse --limit as a number")?;
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Error: unknown argument '{arg}'");
                print_usage();
                return Err(anyhow!("Unknown argument"));
            }
        }
    }

    let dictionary = dict::load_dictionary(&input)?;
    log::info!("Loaded {} entries from {}", dictionary.len(), input.display());

    let transformed = transform::transform_dictionary(dictionary);

    if dry_run {
        for (lemma, entry) in transformed.iter().filter(|(_, e)| e.is_verb()).take(limit) {
            println!("{lemma}: {}", entry.traducao.as_deref().unwrap_or(""));
        }
        return Ok(());
    }

    dict::write_dictionary(&output, &transformed)?;
    println!("Wrote {} entries to {}", transformed.len(), output.display());
    Ok(())
}

fn print_usage() {
    eprintln!("Usage: inflect-glosses [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input <path>   Source dictionary JSON (default: src/_data/nt_greek_dict.json)");
    eprintln!("  --output <path>  Destination JSON (default: src/_data/nt_greek-pt_dict.json)");
    eprintln!("  --dry-run        Print a few inflected entries instead of writing");
    eprintln!("  --limit <n>      How many entries to print in dry-run mode (default: 5)");
}
