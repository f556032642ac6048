use crate::zonal::error::ConversionError;

pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod convert;
pub(crate) mod coords;
pub(crate) mod delimiter;
pub(crate) mod error;
pub(crate) mod generate;
pub(crate) mod import_from_file;
pub(crate) mod target_id;

type Result<T, E = ConversionError> = std::result::Result<T, E>;

/// Column holding client numbers.
const CLIENT_NUMBER_COLUMN: &str = "VKONTO";
/// Column holding latitudes.
const LATITUDE_COLUMN: &str = "COORX";
/// Column holding longitudes.
const LONGITUDE_COLUMN: &str = "COORY";
