//! Reusable prompt-and-validate loop over generic console handles.
//! Every interactive question in the program goes through `prompt_choice`,
//! so the re-prompt behavior is identical everywhere.

use std::io::{self, BufRead, Write};

/// Ask `question` until `parse` accepts the lowercase-trimmed answer.
/// Invalid answers print `error_msg` and ask again; they never escape the
/// loop. EOF on the input surfaces as an `UnexpectedEof` error.
pub fn prompt_choice<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    question: &str,
    error_msg: &str,
    parse: F,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        write!(output, "{} ", question)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "console input closed",
            ));
        }

        let answer = line.trim().to_lowercase();
        if let Some(value) = parse(&answer) {
            return Ok(value);
        }

        writeln!(output, "{}", error_msg)?;
    }
}

/// Strict yes/no question. Anything other than "yes"/"no" re-prompts.
pub fn prompt_yes_no<R, W>(input: &mut R, output: &mut W, question: &str) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    prompt_choice(
        input,
        output,
        question,
        "Sorry, please answer 'yes' or 'no'.",
        |s| match s {
            "yes" => Some(true),
            "no" => Some(false),
            _ => None,
        },
    )
}
