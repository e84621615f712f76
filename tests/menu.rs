use anyhow::{anyhow, Result};
use equation_solver_cli::api::Solver;
use equation_solver_cli::ui::{main_menu, LinePrompter, Prompter};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::Cursor;

/// Answers prompts from a fixed script and records what was asked.
struct Script {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl Script {
    fn new(answers: &[&str]) -> Self {
        Script {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            prompts: Vec::new(),
        }
    }
}

impl Prompter for Script {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().ok_or_else(|| anyhow!("script exhausted"))
    }
}

/// Returns a fixed answer and remembers every query.
struct StubSolver {
    answer: &'static str,
    queries: RefCell<Vec<String>>,
}

impl StubSolver {
    fn new(answer: &'static str) -> Self {
        StubSolver {
            answer,
            queries: RefCell::new(Vec::new()),
        }
    }
}

impl Solver for StubSolver {
    fn fetch_solution(&self, query: &str) -> String {
        self.queries.borrow_mut().push(query.to_string());
        self.answer.to_string()
    }
}

fn run(answers: &[&str], solver: &StubSolver) -> (Result<()>, String, Script) {
    let mut script = Script::new(answers);
    let mut out = Vec::new();
    let res = main_menu(&mut script, solver, &mut out);
    (res, String::from_utf8(out).unwrap(), script)
}

#[test]
fn quadratic_end_to_end() {
    let solver = StubSolver::new("x = 1 or x = 2");
    let (res, out, script) = run(&["1", "1", "-3", "2", "5"], &solver);

    res.unwrap();
    assert_eq!(*solver.queries.borrow(), vec!["solve 1x^2 + -3x + 2 = 0"]);
    assert!(out.lines().any(|l| l == "Solution: x = 1 or x = 2"), "{}", out);
    assert_eq!(
        script.prompts,
        vec![
            "Enter your choice (1/2/3/4/5)",
            "Enter coefficient a",
            "Enter coefficient b",
            "Enter coefficient c",
            "Enter your choice (1/2/3/4/5)",
        ]
    );
    assert!(out.ends_with("Exiting the application. Goodbye!\n"));
}

#[test]
fn invalid_coefficient_skips_the_request() {
    let solver = StubSolver::new("unused");
    let (res, out, _) = run(&["1", "1", "abc", "2", "5"], &solver);

    res.unwrap();
    assert!(solver.queries.borrow().is_empty());
    assert!(out.contains("Invalid input: 'abc' is not a valid number."), "{}", out);
    assert!(!out.contains("Solution:"));
}

#[test]
fn two_unknowns_end_to_end() {
    let solver = StubSolver::new("x = 1 and y = 2");
    let (res, out, script) = run(&["2", "1", "1", "3", "1", "-1", "-1", "5"], &solver);

    res.unwrap();
    assert!(out.contains("Enter coefficients for the equations in the form a1*x + b1*y = c1:"));
    assert_eq!(
        *solver.queries.borrow(),
        vec!["solve { 1x + 1y = 3, 1x + -1y = -1 } for x, y"]
    );
    assert_eq!(
        &script.prompts[1..7],
        &["Enter a1", "Enter b1", "Enter c1", "Enter a2", "Enter b2", "Enter c2"]
    );
    assert!(out.lines().any(|l| l == "Solution: x = 1 and y = 2"));
}

#[test]
fn three_unknowns_end_to_end() {
    let solver = StubSolver::new("x = 5, y = 3, z = -2");
    let answers = ["3", "1", "1", "1", "6", "0", "2", "5", "-4", "2", "5", "-1", "27", "5"];
    let (res, out, _) = run(&answers, &solver);

    res.unwrap();
    assert_eq!(
        *solver.queries.borrow(),
        vec!["solve { 1x + 1y + 1z = 6, 0x + 2y + 5z = -4, 2x + 5y + -1z = 27 } for x, y, z"]
    );
    assert!(out.lines().any(|l| l == "Solution: x = 5, y = 3, z = -2"));
}

#[test]
fn error_strings_are_printed_as_solutions() {
    let solver = StubSolver::new("Error: 501, Wolfram|Alpha did not understand your input");
    let (res, out, _) = run(&["1", "1", "0", "0", "1", "2", "2", "2", "5"], &solver);

    res.unwrap();
    assert_eq!(solver.queries.borrow().len(), 2);
    assert_eq!(out.matches("Solution: Error: 501").count(), 2);
}

#[test]
fn instructions_and_bad_choices_keep_the_loop_going() {
    let solver = StubSolver::new("unused");
    let (res, out, _) = run(&["4", "9", "", "5"], &solver);

    res.unwrap();
    assert!(out.contains("Instructions:"));
    assert!(out.contains("a3*x + b3*y + c3*z = d3"));
    assert_eq!(out.matches("Invalid choice! Please select 1, 2, 3, 4, or 5.").count(), 2);
    assert_eq!(out.matches("Choose a task:").count(), 4);
    assert!(solver.queries.borrow().is_empty());
}

#[test]
fn closed_input_ends_with_an_error() {
    let solver = StubSolver::new("unused");
    let (res, _, _) = run(&["1", "1"], &solver);

    assert!(res.is_err());
    assert!(solver.queries.borrow().is_empty());
}

fn run_piped(stdin: &str, solver: &StubSolver) -> (Result<()>, String) {
    let mut prompter = LinePrompter::new(Cursor::new(stdin.to_string()), Vec::new());
    let mut out = Vec::new();
    let res = main_menu(&mut prompter, solver, &mut out);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn piped_input_reaches_exit() {
    let solver = StubSolver::new("x = 1 or x = 2");
    let (res, out) = run_piped("1\n 1\n-3 \r\n2\n5\n", &solver);

    res.unwrap();
    assert_eq!(*solver.queries.borrow(), vec!["solve 1x^2 + -3x + 2 = 0"]);
    assert!(out.lines().any(|l| l == "Solution: x = 1 or x = 2"), "{}", out);
    assert!(out.ends_with("Exiting the application. Goodbye!\n"));
    assert_eq!(out.matches("Invalid choice!").count(), 0);
}

#[test]
fn piped_input_ending_without_exit_is_an_error() {
    let solver = StubSolver::new("unused");
    let (res, out) = run_piped("4\n", &solver);

    assert!(res.is_err());
    assert!(out.contains("Instructions:"));
    assert_eq!(out.matches("Choose a task:").count(), 2);
    assert_eq!(out.matches("Invalid choice!").count(), 0);

    let (res, out) = run_piped("", &solver);
    assert!(res.is_err());
    assert_eq!(out.matches("Choose a task:").count(), 1);
}
