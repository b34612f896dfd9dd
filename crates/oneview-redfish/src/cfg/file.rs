/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

use std::net::SocketAddr;
use std::time::Duration;

use duration_str::deserialize_duration;
use eyre::WrapErr;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "ONEVIEW_REDFISH_";

/// Configuration of the oneview-redfish service.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OneViewRedfishConfig {
    /// Socket the Redfish API listens on.
    #[serde(default = "Defaults::listen")]
    pub listen: SocketAddr,
    #[serde(default)]
    pub oneview: OneViewConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection parameters of the OneView appliance.
#[derive(Clone, Deserialize, PartialEq)]
pub struct OneViewConfig {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub auth_login_domain: Option<String>,
    #[serde(default = "Defaults::api_version")]
    pub api_version: u32,
    /// Accept self-signed appliance certificates.
    #[serde(default)]
    pub allow_insecure: bool,
    #[serde(
        default = "Defaults::timeout",
        deserialize_with = "deserialize_duration"
    )]
    pub timeout: Duration,
}

impl std::fmt::Debug for OneViewConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OneViewConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("auth_login_domain", &self.auth_login_domain)
            .field("api_version", &self.api_version)
            .field("allow_insecure", &self.allow_insecure)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl Default for OneViewConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            password: String::new(),
            auth_login_domain: None,
            api_version: Defaults::api_version(),
            allow_insecure: false,
            timeout: Defaults::timeout(),
        }
    }
}

impl OneViewConfig {
    pub fn endpoint(&self) -> liboneview::Endpoint {
        liboneview::Endpoint {
            host: self.host.clone(),
            username: Some(self.username.clone()).filter(|u| !u.is_empty()),
            password: Some(self.password.clone()).filter(|p| !p.is_empty()),
            auth_login_domain: self.auth_login_domain.clone(),
            api_version: self.api_version,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Emit logs as JSON lines instead of text.
    #[serde(default)]
    pub json: bool,
}

struct Defaults;

impl Defaults {
    fn listen() -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], 5000))
    }

    fn api_version() -> u32 {
        liboneview::DEFAULT_API_VERSION
    }

    fn timeout() -> Duration {
        Duration::from_secs(30)
    }
}

pub fn parse_config(
    config_str: String,
    site_config_str: Option<String>,
) -> eyre::Result<OneViewRedfishConfig> {
    let mut figment = Figment::new().merge(Toml::string(config_str.as_str()));
    if let Some(site_config_str) = site_config_str {
        figment = figment.merge(Toml::string(site_config_str.as_str()));
    }

    let config: OneViewRedfishConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
        .wrap_err("Failed to load configuration files")?;

    if config.oneview.host.is_empty() {
        eyre::bail!("oneview.host must be configured");
    }
    Ok(config)
}
