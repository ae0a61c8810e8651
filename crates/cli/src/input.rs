//! Line-oriented typed input.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Print `prompt`, then read one line, trimmed. Returns `None` at end of
/// input.
pub fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the operator enters a value that parses as `T`.
///
/// Malformed input is recoverable: an error line is printed and the prompt
/// repeats. Returns `None` at end of input.
pub fn prompt_parsed<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt_line(input, output, prompt)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "Invalid input, please try again.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompt_line_trims_and_echoes_the_prompt() {
        let mut input = Cursor::new("  hello  \n");
        let mut output = Vec::new();

        let line = prompt_line(&mut input, &mut output, "Enter: ").unwrap();
        assert_eq!(line.as_deref(), Some("hello"));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter: ");
    }

    #[test]
    fn prompt_line_reports_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        assert_eq!(prompt_line(&mut input, &mut output, "Enter: ").unwrap(), None);
    }

    #[test]
    fn prompt_parsed_reprompts_on_malformed_input() {
        let mut input = Cursor::new("abc\n4.5\n42\n");
        let mut output = Vec::new();

        let value: Option<i64> = prompt_parsed(&mut input, &mut output, "Number: ").unwrap();
        assert_eq!(value, Some(42));

        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(transcript.matches("Invalid input, please try again.").count(), 2);
        assert_eq!(transcript.matches("Number: ").count(), 3);
    }

    #[test]
    fn prompt_parsed_stops_at_end_of_input() {
        let mut input = Cursor::new("not-a-number\n");
        let mut output = Vec::new();

        let value: Option<i64> = prompt_parsed(&mut input, &mut output, "Number: ").unwrap();
        assert_eq!(value, None);
    }
}
