use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use link_extractor_engine::{
    with_default_extension, DEFAULT_OUTPUT_EXTENSION, DEFAULT_OUTPUT_FILENAME,
};

/// Terminal stand-in for a save-file dialog.
///
/// A blank answer accepts the suggested name; `-` or end of input cancels.
pub fn ask_save_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<PathBuf>> {
    write!(output, "Save as [{DEFAULT_OUTPUT_FILENAME}] ('-' to cancel): ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(interpret_answer(&line))
}

fn interpret_answer(line: &str) -> Option<PathBuf> {
    let answer = line.trim();
    let answer = answer
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(answer);
    match answer {
        "-" => None,
        "" => Some(PathBuf::from(DEFAULT_OUTPUT_FILENAME)),
        path => Some(with_default_extension(path.as_ref(), DEFAULT_OUTPUT_EXTENSION)),
    }
}
