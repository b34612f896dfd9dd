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

use serde_json::json;

/// Redfish `Status` derived from the OneView `status` attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    Ok,
    Warning,
    Critical,
    Disabled,
    Absent,
}

impl Status {
    pub fn from_oneview(status: Option<&str>) -> Self {
        match status {
            Some("OK") => Status::Ok,
            Some("Warning") => Status::Warning,
            Some("Critical") => Status::Critical,
            Some("Disabled") => Status::Disabled,
            _ => Status::Absent,
        }
    }

    pub fn into_json(self) -> serde_json::Value {
        match self {
            Status::Ok => json!({"State": "Enabled", "Health": "OK"}),
            Status::Warning => json!({"State": "Enabled", "Health": "Warning"}),
            Status::Critical => json!({"State": "Enabled", "Health": "Critical"}),
            Status::Disabled => json!({"State": "Disabled", "Health": "Warning"}),
            // no health rollup for unknown hardware
            Status::Absent => json!({"State": "Absent"}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_is_absent() {
        assert_eq!(Status::from_oneview(Some("Unknown")), Status::Absent);
        assert_eq!(Status::from_oneview(None), Status::Absent);
        assert_eq!(Status::Absent.into_json(), json!({"State": "Absent"}));
    }

    #[test]
    fn critical_stays_enabled() {
        assert_eq!(
            Status::from_oneview(Some("Critical")).into_json(),
            json!({"State": "Enabled", "Health": "Critical"})
        );
    }
}
