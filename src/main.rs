// src/main.rs
use std::process::ExitCode;
use env_logger::Env;
use exaroton_client::{Config, Exaroton, Result};
use log::{error, info};
use serde_json::Value;

const ACTIONS: [&str; 8] = ["info", "ram", "start", "stop", "restart", "players", "lists", "servers"];
const USAGE: &str = "usage: exaroton <info|ram|start|stop|restart|players [list]|lists|servers>";

#[tokio::main]
async fn main() -> ExitCode {
    // .env may set RUST_LOG as well as the EXAROTON_* settings
    dotenv::dotenv().ok();

    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(action) = args.first().filter(|a| ACTIONS.contains(&a.as_str())) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&config, action, args.get(1).map(String::as_str)).await {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(text) => {
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to format output: {}", e);
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            error!("{} failed: {}", action, e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config, action: &str, list: Option<&str>) -> Result<Value> {
    let client = Exaroton::from_config(config)?;
    info!("Using API host {}", config.host);

    if action == "servers" {
        return Ok(serde_json::to_value(client.get_servers().await?)?);
    }

    let server = client.server(config.require_server_id()?);
    let output = match action {
        "info" => serde_json::to_value(server.get().await?)?,
        "ram" => Value::from(server.ram().await?),
        "start" => server.start().await?,
        "stop" => server.stop().await?,
        "restart" => server.restart().await?,
        "players" => {
            let list = list.unwrap_or(&config.player_list);
            serde_json::to_value(server.player_list(list).await?)?
        }
        _ => serde_json::to_value(server.player_lists().await?)?,
    };
    Ok(output)
}
