use crate::tools::env_args::retrieve_arg_value;
use crate::zonal::convert::ConversionReport;
use crate::zonal::coords::{ZonalCoords, ZonalCoordsIndex};
use derive_getters::Getters;

const CHECK_ARG: &str = "--check";

/// Outcome of looking up a client number against freshly generated data,
/// as the generated `isTargetClient` and `getZonalCoords` would answer.
#[derive(Debug, Getters, PartialEq)]
pub struct ClientCheck<'a> {
    client_number: String,
    is_target: bool,
    coords: Option<&'a ZonalCoords>,
}

/// Client numbers passed as `--check=1234,5678`.
pub fn retrieve_clients_to_check() -> Vec<String> {
    retrieve_arg_value(CHECK_ARG)
        .map(|clients| {
            clients
                .split(',')
                .map(str::trim)
                .filter(|client| !client.is_empty())
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}

pub fn check_clients<'a>(
    report: &'a ConversionReport,
    client_numbers: &[String],
) -> Vec<ClientCheck<'a>> {
    let index = report
        .coords()
        .as_ref()
        .map(|coords_report| ZonalCoordsIndex::from(coords_report.coords().as_slice()))
        .unwrap_or_default();

    client_numbers
        .iter()
        .map(|client_number| ClientCheck {
            client_number: client_number.clone(),
            is_target: report.target_set().contains(client_number),
            coords: index.get(client_number),
        })
        .collect()
}
