mod cli;

use clap::Parser;
use std::process;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vakantieteller::config::Config;
use vakantieteller::models::{Holiday, QueryContext, Region};
use vakantieteller::services::selector::span_days;
use vakantieteller::services::{
    HolidayApiClient, HolidayService, RetryPolicy, TimeService, TokioTimeService,
};
use vakantieteller::shared::format::{format_date_long, format_date_short, season_emoji};
use vakantieteller::storage::{SelectionStore, SettingsStore};

use crate::cli::{Cli, Command, CountdownArgs, InstellingenArgs, KiesArgs};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("vakantieteller={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let settings = SettingsStore::new(&config.data_dir);
    let selection = SelectionStore::new(&config.data_dir);
    let time: Arc<dyn TimeService> = Arc::new(TokioTimeService::new());

    let client = HolidayApiClient::new(
        config.api_base_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
        RetryPolicy::default(),
        time.clone(),
    );
    let service = HolidayService::new(client, selection.clone(), time);

    match command {
        Command::Overzicht => {
            let context = settings.load().await;
            overzicht(&service, &context).await
        }
        Command::Kies(args) => {
            let context = settings.load().await;
            kies(&service, &selection, &context, args).await
        }
        Command::Countdown(args) => {
            let context = settings.load().await;
            countdown(&service, &context, args).await
        }
        Command::Instellingen(args) => instellingen(&settings, args).await,
    }
}

async fn overzicht(service: &HolidayService, context: &QueryContext) -> anyhow::Result<()> {
    print_header(context);

    let holidays = service.retrieve_holidays_or_empty(context).await;
    if holidays.is_empty() {
        println!("Geen vakanties gevonden");
        return Ok(());
    }

    for (index, holiday) in holidays.iter().enumerate() {
        println!(
            "{:2}. {} {}  |  {} - {}  |  {} dagen",
            index + 1,
            season_emoji(&holiday.kind),
            holiday.kind,
            format_date_short(holiday.start_date),
            format_date_short(holiday.end_date),
            span_days(holiday),
        );
    }
    Ok(())
}

async fn kies(
    service: &HolidayService,
    selection: &SelectionStore,
    context: &QueryContext,
    args: KiesArgs,
) -> anyhow::Result<()> {
    let holidays = service.retrieve_holidays_or_empty(context).await;
    let holiday = pick(&holidays, args.nummer)?;

    selection.write(holiday).await?;
    println!("{} geselecteerd voor het countdown-scherm", holiday.kind);
    Ok(())
}

async fn countdown(
    service: &HolidayService,
    context: &QueryContext,
    args: CountdownArgs,
) -> anyhow::Result<()> {
    print_header(context);

    let pinned = match args.nummer {
        Some(nummer) => {
            let holidays = service.retrieve_holidays_or_empty(context).await;
            Some(pick(&holidays, nummer)?.clone())
        }
        None => None,
    };

    match service.compute_countdown(pinned, context).await {
        Ok(Some(countdown)) => {
            println!("{}  {}", season_emoji(&countdown.holiday.kind), countdown.holiday.kind);
            println!("{}", format_date_long(countdown.holiday.start_date));
            println!("{} dagen te gaan", countdown.days_left);
        }
        Ok(None) => println!("Geen aankomende vakanties gevonden"),
        Err(e) => {
            // Presentation boundary: log the detail, show the empty outcome.
            tracing::error!("Error computing countdown: {}", e);
            println!("Geen aankomende vakanties gevonden");
        }
    }
    Ok(())
}

async fn instellingen(settings: &SettingsStore, args: InstellingenArgs) -> anyhow::Result<()> {
    let mut context = settings.load().await;

    if let Some(latitude) = args.breedtegraad {
        context.region = Region::from_latitude(latitude);
        println!("Regio gedetecteerd: {}", context.region.display_name());
    }
    if let Some(regio) = args.regio {
        context.region = regio;
    }
    if let Some(schooljaar) = args.schooljaar {
        context.school_year = schooljaar;
    }

    settings.save(&context).await?;
    println!(
        "Instellingen opgeslagen: regio {} | {}",
        context.region.display_name(),
        context.school_year
    );
    Ok(())
}

fn pick(holidays: &[Holiday], nummer: usize) -> anyhow::Result<&Holiday> {
    nummer
        .checked_sub(1)
        .and_then(|index| holidays.get(index))
        .ok_or_else(|| {
            anyhow::anyhow!(
                "no holiday number {} in an overview of {}",
                nummer,
                holidays.len()
            )
        })
}

fn print_header(context: &QueryContext) {
    println!(
        "Regio: {} | {}",
        context.region.display_name(),
        context.school_year
    );
}
