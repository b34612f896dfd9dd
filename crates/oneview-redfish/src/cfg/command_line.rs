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

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[clap(name = "oneview-redfish")]
pub struct Options {
    #[clap(long, default_value = "false", help = "Print version number and exit")]
    pub version: bool,

    #[clap(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Path to the configuration file
    /// The contents of this configuration file can be patched by providing
    /// site specific configuration overrides via an additional config file at
    /// `site-config-path`.
    /// All values can be overridden by environmental variables prefixed with
    /// `ONEVIEW_REDFISH_`, nested keys are separated by `__`.
    /// E.g. `ONEVIEW_REDFISH_ONEVIEW__HOST` overrides `oneview.host`.
    #[clap(long)]
    pub config_path: Option<String>,

    /// Path to the configuration file which contains per-site overwrites
    #[clap(long)]
    pub site_config_path: Option<String>,
}

impl Options {
    pub fn load() -> Self {
        Self::parse()
    }
}
