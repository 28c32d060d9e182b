use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::domain::{playlist::PlayList, track::format_seconds};
use crate::library::Library;

#[derive(Parser)]
#[command(name = "playdeck")]
#[command(version = "0.1")]
#[command(about = "Bounded play list manager")]
pub struct Cli {
    /// Path to the playlists TOML file
    #[arg(short, long, default_value = "playlists.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all play lists
    List,
    /// Print the tracks of a play list
    Show { playlist: String },
    /// Show total duration and the shortest track
    Stats { playlist: String },
    /// Find the position of a track by title (case-insensitive)
    Find { playlist: String, title: String },
    /// Sort a play list by increasing duration
    Sort { playlist: String },
    /// Remove the first track with the given title
    Remove { playlist: String, title: String },
    /// Append all tracks of one play list to another
    Merge { into: String, from: String },
}

/// Entrypoint for CLI
pub fn run() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = execute(&cli) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn execute(cli: &Cli) -> anyhow::Result<()> {
    let cfg = config::Config::load(&cli.config)?;
    let mut library = Library::from_config(&cfg)?;

    match &cli.command {
        Commands::List => {
            for entry in library.iter() {
                println!(
                    "{} ({}/{})",
                    entry.name,
                    entry.list.size(),
                    entry.list.max_size()
                );
            }
        }

        Commands::Show { playlist } => {
            print_playlist(playlist, library.get(playlist)?);
        }

        Commands::Stats { playlist } => {
            let list = library.get(playlist)?;
            let total = list.total_duration();
            println!(
                "Total duration: {total} s ({})",
                format_seconds(u32::try_from(total).unwrap_or(u32::MAX))
            );
            match list.title_of_shortest_track() {
                Some(title) => println!("Shortest track: {title}"),
                None => println!("Play list is empty"),
            }
        }

        Commands::Find { playlist, title } => match library.get(playlist)?.index_of(title) {
            Some(index) => println!("'{title}' is at position {index}"),
            None => println!("'{title}' not found"),
        },

        Commands::Sort { playlist } => {
            let list = library.get_mut(playlist)?;
            list.sort_by_duration();
            print_playlist(playlist, list);
        }

        Commands::Remove { playlist, title } => {
            let list = library.get_mut(playlist)?;
            let before = list.size();
            list.remove_title(title);
            if list.size() == before {
                println!("'{title}' not found, nothing removed");
            }
            print_playlist(playlist, list);
        }

        Commands::Merge { into, from } => {
            if library.merge(into, from)? {
                print_playlist(into, library.get(into)?);
            } else {
                println!("'{into}' has no room for all tracks of '{from}', nothing merged");
            }
        }
    }

    Ok(())
}

fn print_playlist(name: &str, list: &PlayList) {
    println!("{name} ({}/{}):", list.size(), list.max_size());
    print!("{list}");
}
