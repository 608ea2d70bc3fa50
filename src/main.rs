mod cli;

use anyhow::Context;
use registry_client::{Config, RegistryClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::build_cli();
    let matches = cmd.get_matches();
    let log_level = matches.get_one::<String>("log-level").cloned();
    let version_flag = matches.get_flag("version");

    cli::init_logging(log_level.as_deref());

    if version_flag {
        println!("registry-client {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let endpoint = matches
        .get_one::<String>("endpoint")
        .map(String::as_str)
        .unwrap_or("limits");

    let cfg = Config::from_env().map_err(anyhow::Error::msg)?;
    let client = RegistryClient::from_config(cfg).context("building http client")?;

    let system = client.system();
    let body = match endpoint {
        "info" => match system.info().get(None).await? {
            Some(info) => serde_json::to_string_pretty(&info)?,
            None => "{}".to_string(),
        },
        _ => match system.limits().get(None).await? {
            Some(limits) => serde_json::to_string_pretty(&limits)?,
            None => "{}".to_string(),
        },
    };
    println!("{body}");
    Ok(())
}
