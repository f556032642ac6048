pub const SEMICOLON: u8 = b';';
pub const COMMA: u8 = b',';

/// Guess the field delimiter from the first line of the file:
/// semicolon when it appears there, comma otherwise.
/// The rest of the file is not looked at.
pub fn detect_delimiter(content: &str) -> u8 {
    let first_line = content.lines().next().unwrap_or_default();
    if first_line.contains(SEMICOLON as char) {
        SEMICOLON
    } else {
        COMMA
    }
}
