use clap::{Parser, Subcommand};
use vakantieteller::models::Region;

/// School holiday overview and countdown for Dutch regions.
#[derive(Parser)]
#[command(
    name = "vakantieteller",
    version,
    about = "School holiday overview and countdown for Dutch regions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List every holiday for the configured region and school year.
    Overzicht,
    /// Pick a holiday from the overview for the next countdown.
    Kies(KiesArgs),
    /// Show the countdown to the next (or selected) holiday.
    Countdown(CountdownArgs),
    /// Save region and school-year settings.
    Instellingen(InstellingenArgs),
}

/// Arguments for the `kies` subcommand.
#[derive(clap::Args)]
pub struct KiesArgs {
    /// 1-based number of the holiday in the overview listing.
    pub nummer: usize,
}

/// Arguments for the `countdown` subcommand.
#[derive(clap::Args)]
pub struct CountdownArgs {
    /// Pin a holiday from the overview instead of using the stored
    /// selection or the next upcoming one.
    #[arg(short, long)]
    pub nummer: Option<usize>,
}

/// Arguments for the `instellingen` subcommand.
#[derive(clap::Args)]
pub struct InstellingenArgs {
    /// Region to fetch holidays for (noord, midden, zuid).
    #[arg(short, long)]
    pub regio: Option<Region>,

    /// School year dataset key, e.g. 2025-2026.
    #[arg(short, long)]
    pub schooljaar: Option<String>,

    /// Derive the region from a GPS latitude instead of naming it.
    #[arg(short, long, conflicts_with = "regio")]
    pub breedtegraad: Option<f64>,
}
