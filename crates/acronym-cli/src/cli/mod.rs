pub mod args;
mod render;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{WrapErr, eyre};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use acronym_core::config::Config;
use acronym_core::distance::levenshtein;
use acronym_core::error::AcronymError;
use acronym_core::{Dictionary, SearchOptions, SearchResults, TitleInfo, search};

use self::args::{Cli, Command, SearchArgs};

const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

pub fn run(cli: Cli) -> color_eyre::Result<()> {
    let config = Config::load()?;

    match cli.command {
        Command::Search { title, args } => cmd_search(&config, &title.join(" "), &args)?,
        Command::Batch { file, args } => cmd_batch(&config, &file, &args)?,
        Command::Analyze { title, json } => cmd_analyze(&title.join(" "), json)?,
        Command::Distance { a, b } => cmd_distance(&a, &b),
        Command::Config { path } => cmd_config(&config, path)?,
    }

    Ok(())
}

fn search_options(config: &Config, args: &SearchArgs) -> Result<SearchOptions, AcronymError> {
    let mut options = config.search_options();
    if let Some(n) = args.min_length {
        options.min_length = n;
    }
    if let Some(n) = args.max_results {
        options.max_results = n;
    }
    if let Some(n) = args.max_edit_distance {
        options.max_edit_distance = n;
    }
    if let Some(term) = &args.filter {
        options.search_term = term.clone();
    }
    if args.no_compounds {
        options.include_compounds = false;
    }
    if args.no_near {
        options.include_near_matches = false;
    }
    options.validate()?;
    Ok(options)
}

fn dictionary_path(config: &Config, args: &SearchArgs) -> PathBuf {
    args.dict
        .clone()
        .or_else(|| config.dictionary_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DICTIONARY))
}

/// An unreadable word list means "no matches possible" unless `--strict`.
fn load_dictionary(config: &Config, args: &SearchArgs) -> color_eyre::Result<Dictionary> {
    let path = dictionary_path(config, args);
    match Dictionary::load(&path) {
        Ok(dictionary) => Ok(dictionary),
        Err(e) if !args.strict => {
            warn!(error = %e, "searching without a dictionary");
            Ok(Dictionary::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn cmd_search(config: &Config, title: &str, args: &SearchArgs) -> color_eyre::Result<()> {
    let options = search_options(config, args)?;
    let dictionary = load_dictionary(config, args)?;
    let info = TitleInfo::analyze(title);

    // Off the main thread, which only renders.
    let results = std::thread::scope(|scope| {
        scope
            .spawn(|| search(&info, &dictionary, &options))
            .join()
    })
    .map_err(|_| eyre!("search worker panicked"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if results.is_empty() {
        eprintln!("No matches for \"{title}\".");
    } else {
        render::print_results(&info, &results);
    }

    Ok(())
}

#[derive(Serialize)]
struct BatchEntry<'a> {
    title: &'a str,
    #[serde(flatten)]
    results: &'a SearchResults,
}

fn cmd_batch(config: &Config, file: &Path, args: &SearchArgs) -> color_eyre::Result<()> {
    let options = search_options(config, args)?;
    let content = std::fs::read_to_string(file)
        .wrap_err_with(|| format!("could not read {}", file.display()))?;
    let titles: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if titles.is_empty() {
        eprintln!("No titles in {}.", file.display());
        return Ok(());
    }

    let dictionary = load_dictionary(config, args)?;
    debug!(titles = titles.len(), "batch search");

    let searched: Vec<(TitleInfo, SearchResults)> = titles
        .par_iter()
        .map(|title| {
            let info = TitleInfo::analyze(title);
            let results = search(&info, &dictionary, &options);
            (info, results)
        })
        .collect();

    for (i, (info, results)) in searched.iter().enumerate() {
        if args.json {
            let entry = BatchEntry {
                title: &info.original,
                results,
            };
            println!("{}", serde_json::to_string(&entry)?);
            continue;
        }
        if i > 0 {
            println!();
        }
        println!("=== {} ===", info.original);
        if results.is_empty() {
            println!("  (no matches)");
        } else {
            render::print_results(info, results);
        }
    }

    Ok(())
}

fn cmd_analyze(title: &str, json: bool) -> color_eyre::Result<()> {
    let info = TitleInfo::analyze(title);
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        render::print_title(&info);
    }
    Ok(())
}

fn cmd_distance(a: &str, b: &str) {
    println!("{}", levenshtein(&a.to_lowercase(), &b.to_lowercase()));
}

fn cmd_config(config: &Config, path: bool) -> color_eyre::Result<()> {
    if path {
        let path = Config::config_path()
            .ok_or_else(|| eyre!("no config directory on this platform"))?;
        println!("{}", path.display());
    } else {
        print!("{}", toml::to_string_pretty(config)?);
    }
    Ok(())
}
