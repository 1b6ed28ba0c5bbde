use game_discovery::cli::{parse_args, run_demo, version_string, CliCommand, USAGE};
use game_discovery::startup::{init_tracing, wire_demo, DiscoveryConfig};

use color_eyre::Result;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Run(options) => options,
    };

    init_tracing();
    let config = DiscoveryConfig::from_env();
    let demo = wire_demo(config, options.fail_refresh).inspect_err(|err| {
        let operation = err.context().map(|ctx| ctx.operation.as_str());
        error!(category = %err.category(), ?operation, "{}", err.user_message());
    })?;

    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Unable to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let mut stdout = std::io::stdout().lock();
    run_demo(demo, &options, &mut stdout, shutdown).await?;
    Ok(())
}
