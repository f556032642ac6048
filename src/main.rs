mod error;
mod tools;
mod zonal;

use crate::error::Result;
use crate::tools::log_message;
use crate::zonal::check::{check_clients, retrieve_clients_to_check};
use crate::zonal::config::ConverterConfig;
use crate::zonal::convert::{ConversionReport, convert};
use env_logger::Env;
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) => {
            log_checked_clients(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log_message(&format!("{e}, aborting..."))(e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ConversionReport> {
    let config = ConverterConfig::from_args()?;
    Ok(convert(&config)?)
}

fn log_checked_clients(report: &ConversionReport) {
    let clients_to_check = retrieve_clients_to_check();
    for check in check_clients(report, &clients_to_check) {
        let target = if *check.is_target() {
            "a target"
        } else {
            "not a target"
        };
        match check.coords() {
            Some(coords) => info!(
                "Client {} is {target}, located at ({}, {}).",
                check.client_number(),
                coords.latitude(),
                coords.longitude()
            ),
            None => info!("Client {} is {target}.", check.client_number()),
        }
    }
}
