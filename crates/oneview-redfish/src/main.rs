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

use eyre::WrapErr;
use oneview_redfish::cfg::command_line::Options;
use oneview_redfish::cfg::file::parse_config;
use oneview_redfish::{logging, run};

const DEFAULT_CONFIG_PATH: &str = "/etc/oneview-redfish/config.toml";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let options = Options::load();
    if options.version {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config_path = options
        .config_path
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config_str = tokio::fs::read_to_string(&config_path)
        .await
        .wrap_err_with(|| format!("Failed to read {config_path}"))?;
    let site_config_str = match &options.site_config_path {
        Some(path) => Some(
            tokio::fs::read_to_string(path)
                .await
                .wrap_err_with(|| format!("Failed to read {path}"))?,
        ),
        None => None,
    };
    let config = parse_config(config_str, site_config_str)?;

    logging::setup_logging(options.debug, config.logging.json)?;
    tracing::info!(?config, "Starting oneview-redfish");

    run(config).await
}
