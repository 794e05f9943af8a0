// src/models/server.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum ServerStatus {
    Offline,
    Online,
    Starting,
    Stopping,
    Restarting,
    Saving,
    Loading,
    Crashed,
    Pending,
    Transferring,
    Preparing,
    Unknown(u8),
}

impl From<u8> for ServerStatus {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Offline,
            1 => Self::Online,
            2 => Self::Starting,
            3 => Self::Stopping,
            4 => Self::Restarting,
            5 => Self::Saving,
            6 => Self::Loading,
            7 => Self::Crashed,
            8 => Self::Pending,
            9 => Self::Transferring,
            10 => Self::Preparing,
            other => Self::Unknown(other),
        }
    }
}

impl From<ServerStatus> for u8 {
    fn from(status: ServerStatus) -> Self {
        match status {
            ServerStatus::Offline => 0,
            ServerStatus::Online => 1,
            ServerStatus::Starting => 2,
            ServerStatus::Stopping => 3,
            ServerStatus::Restarting => 4,
            ServerStatus::Saving => 5,
            ServerStatus::Loading => 6,
            ServerStatus::Crashed => 7,
            ServerStatus::Pending => 8,
            ServerStatus::Transferring => 9,
            ServerStatus::Preparing => 10,
            ServerStatus::Unknown(code) => code,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Players {
    #[serde(default)]
    pub max: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Software {
    pub id: String,
    pub name: String,
    pub version: String,
}

/// A server as described by the `servers/{id}` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub motd: String,
    pub status: ServerStatus,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub players: Players,
    #[serde(default)]
    pub software: Option<Software>,
    #[serde(default)]
    pub shared: bool,
    // Allocated memory in GB, only sent by some endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<u32>,
}

impl Server {
    pub fn is_online(&self) -> bool {
        self.status == ServerStatus::Online
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RamOption {
    pub ram: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_codes_map_to_variants() {
        assert_eq!(ServerStatus::from(0), ServerStatus::Offline);
        assert_eq!(ServerStatus::from(1), ServerStatus::Online);
        assert_eq!(ServerStatus::from(7), ServerStatus::Crashed);
        assert_eq!(ServerStatus::from(9), ServerStatus::Transferring);
        assert_eq!(ServerStatus::from(10), ServerStatus::Preparing);
    }

    #[test]
    fn unknown_status_code_is_preserved() {
        let status: ServerStatus = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(status, ServerStatus::Unknown(42));
        assert_eq!(serde_json::to_value(status).unwrap(), json!(42));
    }

    #[test]
    fn server_decodes_with_optional_fields_missing() {
        let server: Server = serde_json::from_value(json!({
            "id": "Pn8J6Yy0TWUqflP6",
            "name": "survival",
            "address": "survival.exaroton.me",
            "status": 0
        }))
        .unwrap();

        assert_eq!(server.id, "Pn8J6Yy0TWUqflP6");
        assert_eq!(server.status, ServerStatus::Offline);
        assert_eq!(server.players, Players::default());
        assert!(server.software.is_none());
        assert!(server.ram.is_none());
        assert!(!server.is_online());
    }

    #[test]
    fn server_rejects_payload_without_id() {
        let result = serde_json::from_value::<Server>(json!({
            "name": "survival",
            "address": "survival.exaroton.me",
            "status": 1
        }));
        assert!(result.is_err());
    }
}
