// Entrypoint for the CLI application.
// - Keeps `main` small: read config, create an API client and hand it to the
//   menu loop.
// - Returns `anyhow::Result` so setup and console failures are reported.

use equation_solver_cli::api::ApiClient;
use equation_solver_cli::config::Config;
use equation_solver_cli::ui::{main_menu, terminal_attached, LinePrompter, TerminalPrompter};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Credential comes from `WOLFRAM_APP_ID` (environment or `.env`, else
    // ~/.wolfram_app_id), the endpoint from `WOLFRAM_API_URL`. See
    // `config::Config::from_env`.
    let config = Config::from_env();
    let api = ApiClient::new(&config)?;

    // Blocks until the user picks "Exit". Piped or redirected stdin is read
    // line by line, and running out of input ends the loop with an error.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if terminal_attached() {
        main_menu(&mut TerminalPrompter, &api, &mut out)?;
    } else {
        let mut prompter = LinePrompter::new(std::io::stdin().lock(), std::io::stderr());
        main_menu(&mut prompter, &api, &mut out)?;
    }
    Ok(())
}
