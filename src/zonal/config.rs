use crate::tools::env_args::{retrieve_arg_value, retrieve_expected_arg_value};
use crate::zonal::error::ConfigurationError;
use crate::zonal::error::ConfigurationError::{
    InvalidDelimiter, MissingInputPath, MissingOutputPath,
};
use derive_getters::Getters;
use std::path::PathBuf;

const INPUT_ARG: [&str; 2] = ["-i", "--input"];
const OUTPUT_ARG: [&str; 2] = ["-o", "--output"];
const DELIMITER_ARG: [&str; 2] = ["-d", "--delimiter"];
const COORDS_OUTPUT_ARG: &str = "--coords-output";

#[derive(Debug, Clone, Getters, PartialEq, Eq)]
pub struct ConverterConfig {
    input_path: PathBuf,
    output_path: PathBuf,
    /// Overrides delimiter detection when set.
    delimiter: Option<u8>,
    /// Destination of the coordinates module. Not generated when `None`.
    coords_output_path: Option<PathBuf>,
}

impl ConverterConfig {
    pub fn new(
        input_path: PathBuf,
        output_path: PathBuf,
        delimiter: Option<u8>,
        coords_output_path: Option<PathBuf>,
    ) -> Self {
        Self {
            input_path,
            output_path,
            delimiter,
            coords_output_path,
        }
    }

    /// Build the config from the args passed to the app.
    pub fn from_args() -> Result<Self, ConfigurationError> {
        let input_path = retrieve_expected_arg_value(INPUT_ARG, MissingInputPath)?;
        let output_path = retrieve_expected_arg_value(OUTPUT_ARG, MissingOutputPath)?;
        let delimiter = retrieve_arg_value(DELIMITER_ARG)
            .map(|delimiter| parse_delimiter(&delimiter))
            .transpose()?;
        let coords_output_path = retrieve_arg_value(COORDS_OUTPUT_ARG).map(PathBuf::from);

        Ok(Self::new(
            PathBuf::from(input_path),
            PathBuf::from(output_path),
            delimiter,
            coords_output_path,
        ))
    }
}

fn parse_delimiter(value: &str) -> Result<u8, ConfigurationError> {
    match value.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(InvalidDelimiter(value.to_owned())),
    }
}
