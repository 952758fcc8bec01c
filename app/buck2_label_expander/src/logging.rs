/*
 * Copyright (c) Meta Platforms, Inc. and affiliates.
 *
 * This source code is dual-licensed under either the MIT license found in the
 * LICENSE-MIT file in the root directory of this source tree or the Apache
 * License, Version 2.0 found in the LICENSE-APACHE file in the root directory
 * of this source tree. You may select, at your option, one of the
 * above-listed licenses.
 */

use std::env;
use std::env::VarError;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::filter::Filtered;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;
use tracing_subscriber::reload::Handle;
use tracing_subscriber::EnvFilter;

/// Overrides the default log filter, e.g. `BUCK2_LABEL_EXPANDER_LOG=buck2_label_expander=debug`.
pub const LOG_FILTER_VAR: &str = "BUCK2_LABEL_EXPANDER_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

fn log_filter_from_env(var: &str) -> anyhow::Result<EnvFilter> {
    match env::var(var) {
        Ok(v) => EnvFilter::try_new(&v)
            .with_context(|| format!("Failed to parse ${} as a filter: `{}`", var, v)),
        Err(VarError::NotPresent) => Ok(EnvFilter::new(DEFAULT_LOG_FILTER)),
        Err(VarError::NotUnicode(..)) => Err(anyhow::anyhow!("${} is not unicode", var)),
    }
}

pub trait LogConfigurationReloadHandle: Send + Sync + 'static {
    fn update_log_filter(&self, format: &str) -> anyhow::Result<()>;
}

impl dyn LogConfigurationReloadHandle {
    pub fn noop() -> Arc<dyn LogConfigurationReloadHandle> {
        Arc::new(NoopLogConfigurationReloadHandle) as _
    }
}

struct NoopLogConfigurationReloadHandle;

impl LogConfigurationReloadHandle for NoopLogConfigurationReloadHandle {
    fn update_log_filter(&self, _filter: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

impl<L, R> LogConfigurationReloadHandle for Handle<Filtered<L, EnvFilter, R>, R>
where
    L: Send + Sync + 'static,
    R: Send + Sync + 'static,
{
    fn update_log_filter(&self, raw: &str) -> anyhow::Result<()> {
        let filter = EnvFilter::try_new(raw).context("Invalid log filter")?;
        self.modify(|layer| *layer.filter_mut() = filter)
            .context("Error updating log filter")?;
        tracing::debug!("Log filter was updated to: `{}`", raw);
        Ok(())
    }
}

/// Install a global `tracing` subscriber writing to `writer`. Fails if one is already set.
pub fn init_tracing_for_writer<W>(
    writer: W,
) -> anyhow::Result<Arc<dyn LogConfigurationReloadHandle>>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = log_filter_from_env(LOG_FILTER_VAR)?;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_filter(filter);

    let (layer, handle) = reload::Layer::new(layer);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Arc::new(handle) as _)
}
