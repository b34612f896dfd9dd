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

use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Level used when `RUST_LOG` is unset, raised by each `-d` flag.
pub fn default_level(debug: u8) -> LevelFilter {
    match debug {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

const NOISY_TARGETS: &[&str] = &["tower", "tower_http", "rustls", "hyper", "hyper_util", "reqwest"];

/// Builds the filter from `rust_log` when set. Otherwise the default level
/// applies with noisy dependencies capped at WARN.
pub fn env_filter(debug: u8, rust_log: Option<&str>) -> eyre::Result<EnvFilter> {
    let builder = EnvFilter::builder().with_default_directive(default_level(debug).into());
    if let Some(directives) = rust_log {
        return Ok(builder.parse_lossy(directives));
    }
    let mut filter = builder.parse_lossy("");
    for target in NOISY_TARGETS {
        filter = filter.add_directive(format!("{target}=warn").parse()?);
    }
    Ok(filter)
}

pub fn setup_logging(debug: u8, json: bool) -> eyre::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|directives| !directives.is_empty());
    let json_layer = json.then(|| fmt::layer().json());
    let text_layer = (!json).then(fmt::layer);
    tracing_subscriber::registry()
        .with(json_layer)
        .with(text_layer)
        .with(env_filter(debug, rust_log.as_deref())?)
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flags_raise_level() {
        assert_eq!(default_level(0), LevelFilter::INFO);
        assert_eq!(default_level(1), LevelFilter::DEBUG);
        assert_eq!(default_level(3), LevelFilter::TRACE);
    }

    #[test]
    fn rust_log_is_not_capped() {
        let filter = env_filter(0, Some("hyper=debug")).unwrap().to_string().to_lowercase();
        assert!(filter.contains("hyper=debug"));
        assert!(!filter.contains("hyper=warn"));
    }

    #[test]
    fn noisy_targets_are_capped_by_default() {
        let filter = env_filter(1, None).unwrap().to_string().to_lowercase();
        assert!(filter.contains("hyper=warn"));
        assert!(filter.contains("reqwest=warn"));
    }
}
