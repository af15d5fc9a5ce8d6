use std::io::{stdout, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use shelf_cli::cli_args::Args;
use shelf_cli::dispatch::Dispatcher;
use shelf_cli::prompt::LinePrompter;
use shelf_core::clipboard::AutoClipboard;
use shelf_core::error::Result;
use shelf_core::execution::ShellExecutor;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn execute(args: &Args) -> Result<i32> {
    let config = args.to_config();

    let mut prompter = LinePrompter::new()?;
    let clipboard = AutoClipboard;
    let executor = ShellExecutor::new(config.shell.clone());

    let out = stdout();
    let styled = out.is_terminal();

    Dispatcher::new(&config, &mut prompter, &clipboard, &executor, out)
        .styled(styled)
        .run()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match execute(&args) {
        // Negative or oversized codes cannot be reported as-is
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
