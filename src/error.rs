use crate::zonal::error::{ConfigurationError, ConversionError};
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The converter is not properly configured")]
    Configuration(#[from] ConfigurationError),
    #[error("Error while converting the zonal file")]
    Conversion(#[from] ConversionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zonal::error::ConfigurationError::MissingInputPath;
    use crate::zonal::error::ConversionError::WrongEncoding;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        error = {
            ApplicationError::from(MissingInputPath),
            ApplicationError::from(WrongEncoding),
        },
        expected_message = {
            "The converter is not properly configured, aborting...",
            "Error while converting the zonal file, aborting...",
        }
    )]
    fn should_chain_message_without_double_punctuation(
        error: ApplicationError,
        expected_message: &str,
    ) {
        assert_eq!(expected_message, format!("{error}, aborting..."));
    }
}
