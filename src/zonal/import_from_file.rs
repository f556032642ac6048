use crate::zonal::Result;
use crate::zonal::coords::ZonalCoords;
use crate::tools::{log_error_and_return, log_message_and_return};
use crate::zonal::error::ConversionError::{CantReadSourceFile, MalformedSource, WrongEncoding};
use crate::zonal::{CLIENT_NUMBER_COLUMN, LATITUDE_COLUMN, LONGITUDE_COLUMN};
use csv::{Reader, StringRecord};
use encoding::all::UTF_8;
use encoding::{DecoderTrap, Encoding};
use log::{debug, warn};
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read the whole source file and decode it as UTF-8.
/// A leading byte order mark is dropped so that it doesn't stick to the first header.
pub fn read_source_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(log_message_and_return(
        &format!("Can't read source file `{}`.", path.display()),
        CantReadSourceFile,
    ))?;
    let content = UTF_8
        .decode(&bytes, DecoderTrap::Strict)
        .map_err(log_message_and_return(
            "Wrong encoding: expected UTF-8.",
            WrongEncoding,
        ))?;

    Ok(content
        .strip_prefix(BYTE_ORDER_MARK)
        .map(str::to_owned)
        .unwrap_or(content))
}

fn build_reader(content: &str, delimiter: u8) -> Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes())
}

/// Position of `column` in the header row, if any.
/// When the header is repeated, the last one wins.
fn find_column(headers: &StringRecord, column: &str) -> Option<usize> {
    headers
        .as_byte_record()
        .iter()
        .rposition(|header| header == column.as_bytes())
}

/// Load client numbers from the source content, in row order and trimmed.
/// Duplicates are kept. Rows without a client number field are skipped.
pub fn load_targets(content: &str, delimiter: u8) -> Result<Vec<String>> {
    let mut reader = build_reader(content, delimiter);
    let headers = reader
        .headers()
        .map_err(log_error_and_return(MalformedSource))?;
    let Some(column) = find_column(headers, CLIENT_NUMBER_COLUMN) else {
        warn!("No `{CLIENT_NUMBER_COLUMN}` column found in source file.");
        return Ok(vec![]);
    };

    let mut targets = vec![];
    for record in reader.records() {
        let record = record.map_err(log_error_and_return(MalformedSource))?;
        match record.get(column) {
            Some(client_number) => targets.push(client_number.trim().to_owned()),
            None => debug!(
                "Row {} has no `{CLIENT_NUMBER_COLUMN}` field, skipping.",
                row_number(&record)
            ),
        }
    }

    Ok(targets)
}

/// Load clients coordinates from the source content, in row order.
/// Rows lacking any of the fields or holding invalid coordinates are skipped.
pub fn load_coords(content: &str, delimiter: u8) -> Result<Vec<ZonalCoords>> {
    let mut reader = build_reader(content, delimiter);
    let headers = reader
        .headers()
        .map_err(log_error_and_return(MalformedSource))?;
    let columns = (
        find_column(headers, CLIENT_NUMBER_COLUMN),
        find_column(headers, LATITUDE_COLUMN),
        find_column(headers, LONGITUDE_COLUMN),
    );
    let (Some(client_number), Some(latitude), Some(longitude)) = columns else {
        warn!(
            "Source file lacks one of `{CLIENT_NUMBER_COLUMN}`, `{LATITUDE_COLUMN}`, `{LONGITUDE_COLUMN}` columns."
        );
        return Ok(vec![]);
    };

    let mut coords = vec![];
    for record in reader.records() {
        let record = record.map_err(log_error_and_return(MalformedSource))?;
        let fields = (
            record.get(client_number),
            record.get(latitude),
            record.get(longitude),
        );
        let (Some(client_number), Some(latitude), Some(longitude)) = fields else {
            debug!("Row {} is incomplete, skipping.", row_number(&record));
            continue;
        };
        if [client_number, latitude, longitude]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            continue;
        }

        match ZonalCoords::parse(client_number, latitude, longitude) {
            Some(zonal_coords) => coords.push(zonal_coords),
            None => warn!(
                "Invalid coordinates ({latitude}, {longitude}) for client `{}` at row {}, skipping.",
                client_number.trim(),
                row_number(&record)
            ),
        }
    }

    Ok(coords)
}

fn row_number(record: &StringRecord) -> String {
    record
        .position()
        .map(|position| position.line().to_string())
        .unwrap_or_else(|| "?".to_owned())
}
