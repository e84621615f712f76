// UI layer: a numbered text menu. Prompts go through `Prompter` (backed by
// `dialoguer` on a real terminal, plain line reads when stdin is piped),
// answers come from a `Solver`, and every printed line goes to the writer
// handed in by the caller.

use crate::api::Solver;
use crate::input::validate_all;
use crate::query::EquationKind;
use anyhow::{bail, Context, Result};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, IsTerminal, Write};
use std::time::Duration;

const MENU: &str = "\nChoose a task:
1. Solve Quadratic Equation (ax^2 + bx + c = 0)
2. Solve System of 2 Equations with 2 Unknowns
3. Solve System of 3 Equations with 3 Unknowns
4. Instructions
5. Exit";

const INSTRUCTIONS: &str = "
Instructions:
1. Solve Quadratic Equation:
   Input the coefficients a, b, and c for the equation ax^2 + bx + c = 0.

2. Solve System of 2 Equations:
   Input the coefficients for two equations of the form:
   a1*x + b1*y = c1
   a2*x + b2*y = c2

3. Solve System of 3 Equations:
   Input the coefficients for three equations of the form:
   a1*x + b1*y + c1*z = d1
   a2*x + b2*y + c2*z = d2
   a3*x + b3*y + c3*z = d3

4. Exit the application by selecting option 5.
";

/// Source of one line of user input per prompt. The line is returned as
/// read; callers trim it.
pub trait Prompter {
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Whether both stdin and stdout are attached to a terminal, i.e. whether
/// `TerminalPrompter` can be used.
pub fn terminal_attached() -> bool {
    console::user_attended() && std::io::stdin().is_terminal()
}

/// Reads from the terminal with `dialoguer::Input`. Only usable when
/// `terminal_attached()` holds.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let value: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read from terminal")?;
        Ok(value)
    }
}

/// Reads plain lines from any buffered reader (piped or redirected stdin),
/// echoing prompts to `prompts`. End of input is an error.
pub struct LinePrompter<R, W> {
    input: R,
    prompts: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, prompts: W) -> Self {
        LinePrompter { input, prompts }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.prompts, "{}: ", prompt)?;
        self.prompts.flush()?;
        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("Failed to read from standard input")?;
        if n == 0 {
            bail!("standard input closed before the menu was exited");
        }
        Ok(line)
    }
}

/// Main interactive menu. Loops until the user picks "Exit" or input can
/// no longer be read.
pub fn main_menu<P, S, W>(prompter: &mut P, solver: &S, out: &mut W) -> Result<()>
where
    P: Prompter,
    S: Solver,
    W: Write,
{
    loop {
        writeln!(out, "{}", MENU)?;
        out.flush()?;
        let choice = prompter.read_line("Enter your choice (1/2/3/4/5)")?;
        match choice.trim() {
            "1" => handle_solve(EquationKind::Quadratic, prompter, solver, out)?,
            "2" => handle_solve(EquationKind::TwoUnknowns, prompter, solver, out)?,
            "3" => handle_solve(EquationKind::ThreeUnknowns, prompter, solver, out)?,
            "4" => write!(out, "{}", INSTRUCTIONS)?,
            "5" => {
                writeln!(out, "Exiting the application. Goodbye!")?;
                break;
            }
            _ => writeln!(out, "Invalid choice! Please select 1, 2, 3, 4, or 5.")?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Collect every coefficient for `kind`, validate them all, and only then
/// ask the solver. A bad coefficient ends the action without a request.
fn handle_solve<P, S, W>(
    kind: EquationKind,
    prompter: &mut P,
    solver: &S,
    out: &mut W,
) -> Result<()>
where
    P: Prompter,
    S: Solver,
    W: Write,
{
    if let Some(hint) = kind.form_hint() {
        writeln!(out, "{}", hint)?;
        out.flush()?;
    }

    let mut raw = Vec::with_capacity(kind.coefficient_names().len());
    for name in kind.coefficient_names() {
        let value = prompter.read_line(&kind.prompt_for(name))?;
        raw.push(value.trim().to_string());
    }

    let coefficients = match validate_all(&raw) {
        Ok(c) => c,
        Err(e) => {
            writeln!(out, "{}", e)?;
            return Ok(());
        }
    };

    let query = kind
        .build_query(&coefficients)
        .context("coefficient count does not match equation shape")?;
    log::debug!("Query sent to API: {}", query);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Asking Wolfram|Alpha...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    let solution = solver.fetch_solution(&query);
    spinner.finish_and_clear();

    writeln!(out, "Solution: {}", solution)?;
    Ok(())
}
