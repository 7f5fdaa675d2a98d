// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Queue manager facade.
//
// Composes the listing parsers, the URI classifier, and the driver matcher
// over a command runner.  No parsing happens here beyond gluing those parts
// together; every operation issues at most one external command and awaits
// it.  There is no shared mutable state, so concurrent calls interleave
// freely.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use tracing::{info, warn};

use satzwerk_core::config::CupsConfig;
use satzwerk_core::error::{Result, SatzwerkError};
use satzwerk_core::types::{
    DiscoveryResult, DriverRecord, InstallRequest, JobReceipt, PrinterRecord,
};

use crate::discovery::parse_discovery_listing;
use crate::drivers::parse_driver_catalog;
use crate::exec::{CommandOutput, CommandRunner};
use crate::matcher::search_drivers;
use crate::options;
use crate::status::parse_printer_listing;

/// Manager over the CUPS command-line tools.
pub struct CupsManager<R: CommandRunner> {
    runner: R,
    config: CupsConfig,
}

impl<R: CommandRunner> CupsManager<R> {
    pub fn new(runner: R) -> Self {
        Self::with_config(runner, CupsConfig::default())
    }

    pub fn with_config(runner: R, config: CupsConfig) -> Self {
        Self { runner, config }
    }

    /// Installed queues with their connection strings and default flag.
    ///
    /// A failing or silent status command yields an empty list — "no
    /// printers" and "no spooler running" are the same answer here.
    pub async fn list(&self) -> Result<Vec<PrinterRecord>> {
        let output = match self
            .runner
            .run(&self.config.lpstat_path, &["-s".to_string()])
            .await
        {
            Ok(output) => output,
            Err(e) => {
                warn!(error = %e, "status command unavailable; listing no printers");
                return Ok(Vec::new());
            }
        };
        if !output.has_data() {
            return Ok(Vec::new());
        }
        Ok(parse_printer_listing(&output.stdout))
    }

    /// A single queue by case-insensitive name, or the default queue when
    /// `name` is `None`.  No match is `Ok(None)`, not an error.
    pub async fn get(&self, name: Option<&str>) -> Result<Option<PrinterRecord>> {
        let printers = self.list().await?;
        Ok(match name {
            Some(name) => printers
                .into_iter()
                .find(|p| p.name.eq_ignore_ascii_case(name)),
            None => printers.into_iter().find(|p| p.is_default),
        })
    }

    /// Discoverable devices grouped by backend token.
    pub async fn discover(&self) -> Result<DiscoveryResult> {
        let output = self
            .runner
            .run(&self.config.lpinfo_path, &["-v".to_string()])
            .await?;
        self.expect_success(&self.config.lpinfo_path, &output)?;
        Ok(parse_discovery_listing(&output.stdout))
    }

    /// Drivers matching the given slugs, capped at `maxsize` (configured
    /// default when `None`).  With no slugs, the full catalog.
    pub async fn find_drivers(
        &self,
        slugs: &[&str],
        maxsize: Option<usize>,
    ) -> Result<Vec<DriverRecord>> {
        let output = self
            .runner
            .run(
                &self.config.lpinfo_path,
                &["-m".to_string(), "-l".to_string()],
            )
            .await?;
        self.expect_success(&self.config.lpinfo_path, &output)?;

        let catalog = parse_driver_catalog(&output.stdout);
        let cap = maxsize.unwrap_or(self.config.max_driver_results);
        Ok(search_drivers(&catalog, slugs, cap))
    }

    /// Install a queue for a device.
    pub async fn install(&self, request: &InstallRequest) -> Result<()> {
        if request.device_uri.trim().is_empty() {
            return Err(SatzwerkError::MissingDeviceUri(request.queue.clone()));
        }
        let args = options::install_args(request)?;
        let output = self.runner.run(&self.config.lpadmin_path, &args).await?;
        self.expect_success(&self.config.lpadmin_path, &output)?;
        info!(queue = request.queue, uri = request.device_uri, "queue installed");
        Ok(())
    }

    /// Remove an installed queue.
    pub async fn uninstall(&self, name: &str) -> Result<()> {
        let args = options::uninstall_args(name);
        let output = self.runner.run(&self.config.lpadmin_path, &args).await?;
        self.expect_success(&self.config.lpadmin_path, &output)?;
        info!(queue = name, "queue removed");
        Ok(())
    }

    /// Submit a file to a queue and return the spooler's receipt.
    pub async fn print_file(
        &self,
        queue: &str,
        path: &Path,
        job_options: &BTreeMap<String, String>,
    ) -> Result<JobReceipt> {
        let args = options::job_args(queue, &path.to_string_lossy(), job_options)?;
        let output = self.runner.run(&self.config.lp_path, &args).await?;
        self.expect_success(&self.config.lp_path, &output)?;

        let request_id = parse_request_id(&output.stdout).unwrap_or_else(|| {
            warn!(queue, "submission output carried no request id");
            "unknown".to_string()
        });
        info!(queue, request_id, "job submitted");
        Ok(JobReceipt {
            request_id,
            queue: queue.to_string(),
            submitted_at: Utc::now(),
        })
    }

    fn expect_success(&self, command: &str, output: &CommandOutput) -> Result<()> {
        if output.success {
            return Ok(());
        }
        Err(SatzwerkError::CommandFailed {
            command: command.to_string(),
            detail: output.stderr.trim().to_string(),
        })
    }
}

/// Pull the request id out of submission output such as
/// `request id is HP_LaserJet-42 (1 file(s))`.
fn parse_request_id(stdout: &str) -> Option<String> {
    let rest = stdout.split("request id is ").nth(1)?;
    rest.split_whitespace().next().map(str::to_string)
}
