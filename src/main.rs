use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use bakery_shop::script::{read_actions, write_cart, write_orders};
use bakery_shop::{ShopConfig, SimulatedSubmitter, Storefront};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = env::args().nth(1) else {
        error!("usage: bakery-shop <session.csv>");
        return ExitCode::FAILURE;
    };

    if !path.ends_with(".csv") {
        warn!(path, "input file seems to not be a csv file");
    }

    let config = match ShopConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let actions = match read_actions(Path::new(&path)) {
        Ok(actions) => actions,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let submitter = SimulatedSubmitter::new(config.submit_delay);
    let mut storefront = Storefront::new(config, submitter);
    let (action_sender, action_receiver) = tokio::sync::mpsc::channel(16);

    let reader = tokio::spawn(async move {
        for result in actions {
            match result {
                Ok(action) => {
                    if action_sender.send(action).await.is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("{e}");
                }
            }
        }
    });

    storefront.run(ReceiverStream::new(action_receiver)).await;
    if let Err(e) = reader.await {
        error!("script reader failed: {e}");
    }

    match write_summary(&storefront) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("failed to write summary: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Cart lines, a blank line, then the orders placed this session.
fn write_summary(storefront: &Storefront<SimulatedSubmitter>) -> Result<(), csv::Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_cart(&mut out, storefront.cart())?;
    writeln!(out)?;
    write_orders(&mut out, storefront.confirmations())?;
    Ok(())
}
