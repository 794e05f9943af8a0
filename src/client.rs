// src/client.rs
use log::{debug, info};
use serde_json::Value;
use crate::config::{Config, DEFAULT_HOST};
use crate::error::Result;
use crate::models::response::{check_success, into_data};
use crate::models::server::{RamOption, Server};
use crate::transport::Transport;

/// Client for the exaroton REST API.
///
/// Every method is a single GET against a fixed path template; nothing is
/// retried or cached. The remote server's lifecycle is not tracked here,
/// poll [`Exaroton::get_server`] to watch a start or stop complete.
#[derive(Debug, Clone)]
pub struct Exaroton {
    transport: Transport,
}

impl Exaroton {
    pub fn new(token: &str) -> Result<Self> {
        Self::with_host(token, DEFAULT_HOST)
    }

    pub fn with_host(token: &str, host: &str) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(token, host)?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_host(&config.token, &config.host)
    }

    /// Handle bound to one server id.
    pub fn server<'a>(&'a self, id: &'a str) -> ServerHandle<'a> {
        ServerHandle { client: self, id }
    }

    pub async fn get_servers(&self) -> Result<Vec<Server>> {
        into_data(self.transport.request("servers").await?)
    }

    pub async fn get_server(&self, id: &str) -> Result<Server> {
        let server: Server = into_data(self.transport.request(&format!("servers/{}", id)).await?)?;
        debug!("Server {} ({}) is {:?}", server.id, server.name, server.status);
        Ok(server)
    }

    /// Currently allocated RAM in GB.
    pub async fn get_server_ram(&self, id: &str) -> Result<u32> {
        let option: RamOption = into_data(
            self.transport
                .request(&format!("servers/{}/options/ram", id))
                .await?,
        )?;
        Ok(option.ram)
    }

    pub async fn start(&self, id: &str) -> Result<Value> {
        self.command(id, "start").await
    }

    pub async fn stop(&self, id: &str) -> Result<Value> {
        self.command(id, "stop").await
    }

    pub async fn restart(&self, id: &str) -> Result<Value> {
        self.command(id, "restart").await
    }

    // start/stop/restart carry no structured confirmation, so the body is
    // handed back as-is once the envelope reports success.
    async fn command(&self, id: &str, action: &str) -> Result<Value> {
        info!("Sending {} to server {}", action, id);
        let body = self
            .transport
            .request(&format!("servers/{}/{}", id, action))
            .await?;
        check_success(&body)?;
        Ok(body)
    }

    pub async fn get_player_lists(&self, id: &str) -> Result<Vec<String>> {
        into_data(
            self.transport
                .request(&format!("servers/{}/playerlists", id))
                .await?,
        )
    }

    pub async fn get_player_list(&self, id: &str, list: &str) -> Result<Vec<String>> {
        into_data(
            self.transport
                .request(&format!("servers/{}/playerlists/{}", id, list))
                .await?,
        )
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ServerHandle<'a> {
    client: &'a Exaroton,
    id: &'a str,
}

impl<'a> ServerHandle<'a> {
    pub fn id(&self) -> &str {
        self.id
    }

    pub async fn get(&self) -> Result<Server> {
        self.client.get_server(self.id).await
    }

    pub async fn ram(&self) -> Result<u32> {
        self.client.get_server_ram(self.id).await
    }

    pub async fn start(&self) -> Result<Value> {
        self.client.start(self.id).await
    }

    pub async fn stop(&self) -> Result<Value> {
        self.client.stop(self.id).await
    }

    pub async fn restart(&self) -> Result<Value> {
        self.client.restart(self.id).await
    }

    pub async fn player_lists(&self) -> Result<Vec<String>> {
        self.client.get_player_lists(self.id).await
    }

    pub async fn player_list(&self, list: &str) -> Result<Vec<String>> {
        self.client.get_player_list(self.id, list).await
    }
}
