// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together into the interactive solver.
//
// Module responsibilities:
// - `config`: Reads the Wolfram|Alpha credential and endpoint once at
//   startup.
// - `input`: Validates the coefficients typed by the user.
// - `query`: Turns validated coefficients into natural-language queries.
// - `api`: Sends a query to the Short Answers API and returns its text.
// - `ui`: Implements the terminal menu and delegates requests to `api`.
//
// The menu only talks to the network through the `api::Solver` trait, so
// the whole flow can be exercised in tests without a live service.
pub mod api;
pub mod config;
pub mod input;
pub mod query;
pub mod ui;
