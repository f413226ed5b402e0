use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;

use hookping::cli::Cli;
use hookping::config::Config;
use hookping::logging::setup_logging;
use hookping::notifier::notify;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose).context("Initialising logger")?;

    let config = Config::load(cli.config.clone())?;

    let rt = Runtime::new()?;
    let outcome = rt.block_on(notify(
        cli.webhook_url.as_deref(),
        config.webhook_url.as_deref(),
    ));

    outcome.emit(&mut std::io::stdout().lock());

    // Exit code: 0 unless --strict (1 = request failed, 2 = non-2xx status)
    let code = outcome.exit_code(cli.strict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
