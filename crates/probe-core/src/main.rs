mod config;
mod lifecycle;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::info;

use config::ProbeConfig;
use lifecycle::ProbeRuntime;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = ProbeConfig::load()?;
    let mut runtime = ProbeRuntime::new(config);

    runtime.register().await?;
    info!(api = %runtime.api(), "authorized and ready to run tests");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            line = lines.next_line() => {
                match line? {
                    Some(raw) => {
                        let test_id = raw.trim();
                        if test_id.is_empty() {
                            continue;
                        }
                        runtime.run_cycle(test_id).await;
                    }
                    None => {
                        info!("operator input closed");
                        break;
                    }
                }
            }
        }
    }

    info!(cycles = runtime.cycles_completed(), "probe stopped");
    Ok(())
}
