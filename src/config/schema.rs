//! Configuration schema types
//!
//! These types are deserialized from YAML scenario files. Rust field names
//! map to camelCase document keys (`targetServer`, `loadPattern`,
//! `maxRequestsPerSecond`, ...). Unknown document keys are ignored, and
//! every top-level block except `metadata` and `tls` decodes to its
//! zero value when its key is missing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Top-Level Configuration
// ============================================================================

/// Root configuration for one load-test scenario.
///
/// After a successful load, `target_server`, `services`, `load_pattern`,
/// and `rate_limiting` are always populated (zero-valued if their keys
/// were missing); `metadata` and `tls` stay empty/`None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Server the generated load is aimed at.
    #[serde(default)]
    pub target_server: TargetServer,

    /// Services and methods to exercise, in document order.
    #[serde(default)]
    pub services: Vec<Service>,

    /// Shape of the generated load over time.
    #[serde(default)]
    pub load_pattern: LoadPattern,

    /// Client-side request rate constraints.
    #[serde(default)]
    pub rate_limiting: RateLimiting,

    /// Free-form scenario metadata (environment, version, ...).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, String>,

    /// TLS client settings; `None` for plaintext targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<Tls>,
}

// ============================================================================
// Target Server
// ============================================================================

/// The server under test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetServer {
    /// Hostname or address of the target.
    #[serde(default)]
    pub host: String,

    /// Target port. Whether the port is actually reachable is the load
    /// engine's problem, not the loader's.
    #[serde(default)]
    pub port: u16,
}

// ============================================================================
// Services and Methods
// ============================================================================

/// One RPC service exposed by the target.
///
/// Service and method names are not required to be unique; the loader
/// preserves whatever the document says.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Service identifier (e.g. "users").
    #[serde(default)]
    pub name: String,

    /// Methods of this service to exercise, in document order.
    #[serde(default)]
    pub methods: Vec<Method>,
}

/// One RPC method plus an example request payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Method {
    /// Method identifier (e.g. "createUser").
    #[serde(default)]
    pub name: String,

    /// Example request payload. Values are arbitrary YAML: scalars,
    /// sequences, and mappings at any nesting depth.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub input: HashMap<String, serde_yaml::Value>,
}

// ============================================================================
// Load Pattern
// ============================================================================

/// Shape of the generated load over time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadPattern {
    /// Pattern tag interpreted by the load engine (e.g. "ramp-up",
    /// "constant", "spike"). Free-form; the loader does not constrain it.
    #[serde(rename = "type", default)]
    pub pattern_type: String,

    /// Number of virtual users driven concurrently.
    #[serde(default)]
    pub concurrent_users: u32,

    /// Steady-state duration, authored as `durationSeconds`.
    #[serde(rename = "durationSeconds", with = "duration_secs", default)]
    pub duration: Duration,

    /// Optional ramp-up phase preceding steady state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ramp_up: Option<RampUp>,

    /// Optional cooldown phase following steady state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<Cooldown>,
}

/// Ramp-up phase of a load pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RampUp {
    /// Phase duration, authored as `durationSeconds`.
    #[serde(rename = "durationSeconds", with = "duration_secs", default)]
    pub duration: Duration,
}

/// Cooldown phase of a load pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cooldown {
    /// Phase duration, authored as `durationSeconds`.
    #[serde(rename = "durationSeconds", with = "duration_secs", default)]
    pub duration: Duration,
}

// ============================================================================
// Rate Limiting
// ============================================================================

/// Client-side request rate constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimiting {
    /// Maximum request rate across all virtual users. 0 means no limit.
    #[serde(default)]
    pub max_requests_per_second: u32,
}

// ============================================================================
// TLS
// ============================================================================

/// TLS client settings.
///
/// Paths are carried as-is; the loader does not check that the files exist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tls {
    /// Whether to connect over TLS.
    #[serde(default)]
    pub enabled: bool,

    /// Client certificate path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_file: Option<PathBuf>,

    /// Client key path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,
}

// ============================================================================
// Duration Encoding
// ============================================================================

/// Serde adapter for durations authored as a numeric seconds count.
///
/// Every duration field in the schema goes through this one module, so the
/// seconds-to-[`Duration`] conversion cannot drift between fields.
pub(crate) mod duration_secs {
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;
    use std::time::Duration;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|e| de::Error::custom(format!("invalid durationSeconds {secs}: {e}")))
    }

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }
}

// ============================================================================
// Tests
// ============================================================================
