use crate::zonal::Result;
use crate::zonal::config::ConverterConfig;
use crate::zonal::coords::{ZonalCoords, ZonalCoordsIndex};
use crate::zonal::delimiter::detect_delimiter;
use crate::tools::log_message_and_return;
use crate::zonal::error::ConversionError::CantWriteOutputFile;
use crate::zonal::generate::{create_tera_renderer, render_coords_module, render_targets_module};
use crate::zonal::import_from_file::{load_coords, load_targets, read_source_file};
use crate::zonal::target_id::TargetSet;
use derive_getters::Getters;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

#[derive(Debug, Getters, PartialEq)]
pub struct ConversionReport {
    /// Number of client numbers written, duplicates included.
    targets_count: usize,
    /// What the generated `isTargetClient` matches.
    target_set: TargetSet,
    output_path: PathBuf,
    coords: Option<CoordsReport>,
}

#[derive(Debug, Getters, PartialEq)]
pub struct CoordsReport {
    coords: Vec<ZonalCoords>,
    output_path: PathBuf,
}

/// Convert the zonal source file into the generated JS module(s).
///
/// Everything is read and rendered before the first file is written:
/// when the source can't be read, no output is touched.
/// Outputs are overwritten.
pub fn convert(config: &ConverterConfig) -> Result<ConversionReport> {
    let input_path = config.input_path();
    let content = read_source_file(input_path)?;
    let delimiter = config
        .delimiter()
        .unwrap_or_else(|| detect_delimiter(&content));
    debug!(
        "Reading `{}` with delimiter `{}`.",
        input_path.display(),
        delimiter as char
    );

    let targets = load_targets(&content, delimiter)?;
    let target_set = TargetSet::from(targets.as_slice());
    let coords = match config.coords_output_path() {
        Some(_) => Some(load_coords(&content, delimiter)?),
        None => None,
    };

    let tera = create_tera_renderer()?;
    let source_name = get_source_name(input_path);
    let targets_module = render_targets_module(&tera, &source_name, &targets)?;
    let coords_module = coords
        .as_deref()
        .map(|coords| render_coords_module(&tera, &source_name, coords))
        .transpose()?;

    let output_path = config.output_path();
    write_module(output_path, &targets_module)?;
    info!(
        "Successfully wrote {} records to {}",
        targets.len(),
        output_path.display()
    );
    if target_set.is_empty() {
        warn!("No numeric client number found, `isTargetClient` will never match.");
    } else {
        debug!("{} distinct numeric targets.", target_set.len());
    }

    let coords_report = match (config.coords_output_path(), coords, coords_module) {
        (Some(coords_output_path), Some(coords), Some(coords_module)) => {
            write_module(coords_output_path, &coords_module)?;
            log_coords(&coords, coords_output_path);
            Some(CoordsReport {
                coords,
                output_path: coords_output_path.clone(),
            })
        }
        _ => None,
    };

    Ok(ConversionReport {
        targets_count: targets.len(),
        target_set,
        output_path: output_path.clone(),
        coords: coords_report,
    })
}

fn log_coords(coords: &[ZonalCoords], output_path: &Path) {
    let index = ZonalCoordsIndex::from(coords);
    if index.is_empty() {
        warn!("No usable zonal coordinates found, `getZonalCoords` will never match.");
    }
    info!(
        "Successfully wrote {} zonal coordinates ({} distinct clients) to {}",
        coords.len(),
        index.len(),
        output_path.display()
    );
}

fn get_source_name(input_path: &Path) -> String {
    input_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn write_module(output_path: &Path, module: &str) -> Result<()> {
    std::fs::write(output_path, module).map_err(log_message_and_return(
        &format!("Can't write `{}`.", output_path.display()),
        CantWriteOutputFile,
    ))
}
