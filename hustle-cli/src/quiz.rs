//! Interactive driver for the classification quiz.

use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use hustle_core::classification::QuizFlow;

/// Runs the two-question flow over the given reader/writer pair.
///
/// Accepts `y`/`yes`/`n`/`no` (case-insensitive); anything else is ignored
/// and the question re-prompted. Ends once a classification is reached.
pub fn run_quiz<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
) -> Result<()> {
    let mut flow = QuizFlow::new();

    loop {
        if let Some(classification) = flow.result() {
            writeln!(out)?;
            writeln!(out, "Your status: {}", classification.label())?;
            writeln!(out, "Next steps:")?;
            for step in classification.next_steps() {
                writeln!(out, "  - {step}")?;
            }
            return Ok(());
        }

        let question = flow.question();
        writeln!(out)?;
        writeln!(out, "{}", question.text())?;
        writeln!(out, "Examples: {}", question.examples())?;
        write!(out, "[y/n] ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("input closed before the quiz finished");
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => flow.answer(true),
            "n" | "no" => flow.answer(false),
            other => {
                writeln!(out, "Please answer y or n (got '{other}').")?;
            }
        }
    }
}
