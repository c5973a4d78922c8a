#![doc = include_str!("../README.md")]

mod cli;
mod meter;
mod normalizer;
mod prelude;
mod quantity;
mod tables;
mod tariff;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
    tables::{build_quote_table, build_schedule_table},
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Quote(args) => {
            let schedule = args.schedule.load()?;
            let channels = args.reading.channels()?;
            let quote = schedule
                .quote_channels(&channels)
                .context("failed to quote the reading")?;
            info!(
                usage = %quote.usage,
                base = %quote.base,
                with_tax = %quote.with_tax,
                cost_unit = schedule.cost_unit(),
                "quoted",
            );
            println!("{}", build_quote_table(&quote, schedule.cost_unit()));
        }

        Command::Tiers(args) => {
            let schedule = args.load()?;
            println!("{}", build_schedule_table(&schedule));
        }
    }

    info!("done!");
    Ok(())
}
