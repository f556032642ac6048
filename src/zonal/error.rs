use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Missing input file path (expected `--input=<path>`).")]
    MissingInputPath,
    #[error("Missing output file path (expected `--output=<path>`).")]
    MissingOutputPath,
    #[error("Invalid delimiter `{0}`: expected a single ASCII character.")]
    InvalidDelimiter(String),
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Can't read the source file.")]
    CantReadSourceFile,
    #[error("The source file has an unexpected encoding, expected UTF-8.")]
    WrongEncoding,
    #[error("The source file can't be read as CSV.")]
    MalformedSource,
    #[error("Can't serialize targets list.")]
    Serialization(#[from] serde_json::Error),
    #[error("Can't render the generated module.")]
    Template(#[from] tera::Error),
    #[error("Can't write the generated module.")]
    CantWriteOutputFile,
}
