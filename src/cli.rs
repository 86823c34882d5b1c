// src/cli.rs
//! Terminal front end: fetch (or read a saved page), reshape, then print or
//! write one view of the table.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{eyre, Result};

use crate::{
    config::options::{AppOptions, ExportFormat, View},
    core::net::FileFetcher,
    data::PlanetTable,
    file,
    log::{self, LogTarget},
    progress::LogProgress,
    scrape,
};

#[derive(Parser, Debug)]
#[command(name = "planet_facts", version)]
#[command(about = "Fetch the NASA planetary fact sheet and print it by property or by planet")]
pub struct Args {
    /// Page to fetch
    #[arg(long, env = "PLANET_FACTS_URL")]
    pub url: Option<String>,

    /// Read a saved copy of the page instead of fetching; wins over --url
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Primary axis of the output grid
    #[arg(long, value_enum, default_value_t = View::Property)]
    pub view: View,

    /// Print every fact of one planet (case-insensitive)
    #[arg(long, conflicts_with = "out")]
    pub planet: Option<String>,

    /// Print the planet names in header order
    #[arg(long, conflicts_with_all = ["planet", "out"])]
    pub list_planets: bool,

    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Emit the header row
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub include_headers: bool,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    fn into_options(self) -> AppOptions {
        let mut opts = AppOptions::default();
        if let Some(url) = self.url {
            opts.source.url = url;
        }
        opts.export.view = self.view;
        opts.export.format = self.format;
        opts.export.include_headers = self.include_headers;
        if let Some(out) = self.out {
            opts.export.set_path(out);
        }
        opts
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(LogTarget::Stderr, if args.verbose { "debug" } else { "warn" });
    logd!("CLI: {args:?}");

    let html = args.html.clone();
    let planet = args.planet.clone();
    let list_planets = args.list_planets;
    let write_file = args.out.is_some();
    let opts = args.into_options();

    let mut prog = LogProgress;
    let table = match &html {
        Some(path) => {
            let fetcher = FileFetcher::new(path);
            scrape::collect_planet_table(&fetcher, &opts.source, Some(&mut prog))?
        }
        None => scrape::run(&opts.source, Some(&mut prog))?,
    };

    if list_planets {
        for name in table.planet_names() {
            println!("{name}");
        }
        return Ok(());
    }

    if let Some(name) = planet {
        return print_planet(&table, &name);
    }

    if write_file {
        let path = file::export_table(&opts.export, &table)?;
        println!("Wrote {}", path.display());
    } else {
        print!("{}", file::export_string(&opts.export, &table));
    }
    Ok(())
}

fn print_planet(table: &PlanetTable, name: &str) -> Result<()> {
    let planet = table.find_planet(name).ok_or_else(|| {
        eyre!(
            "no planet named {name:?}; known: {}",
            table.planet_names().join(", ")
        )
    })?;

    println!("{planet}");
    for fact in planet.facts() {
        println!("  {fact}");
    }
    Ok(())
}
