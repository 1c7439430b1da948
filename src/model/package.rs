use super::{nullable, Vulnerability};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageInfo {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub version: String,
    #[serde(default, deserialize_with = "nullable")]
    pub ecosystem: String,
}

/// A resolved dependency and the advisories reported against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannedPackage {
    #[serde(default)]
    pub package: PackageInfo,
    #[serde(default, deserialize_with = "nullable")]
    pub vulnerabilities: Vec<Vulnerability>,
}

impl ScannedPackage {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        ecosystem: impl Into<String>,
    ) -> Self {
        Self {
            package: PackageInfo {
                name: name.into(),
                version: version.into(),
                ecosystem: ecosystem.into(),
            },
            vulnerabilities: Vec::new(),
        }
    }

    pub fn with_vulnerability(mut self, vulnerability: Vulnerability) -> Self {
        self.vulnerabilities.push(vulnerability);
        self
    }

    /// `"{name} {version}"`, the label shown next to each advisory.
    pub fn label(&self) -> String {
        format!("{} {}", self.package.name, self.package.version)
    }
}
