//! Logging and telemetry export setup
//!
//! Console output always goes through a `tracing_subscriber::fmt` layer.
//! With the `otlp` feature, events are also bridged to an OTLP log exporter
//! when `telemetry.enabled` is set.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

#[cfg(feature = "otlp")]
use crate::config::TelemetrySection;
#[cfg(feature = "otlp")]
use opentelemetry_sdk::logs::LoggerProvider;

/// Keeps the exporter alive; call [`TelemetryGuard::shutdown`] before exit.
#[derive(Default)]
pub struct TelemetryGuard {
    #[cfg(feature = "otlp")]
    provider: Option<LoggerProvider>,
}

#[cfg(feature = "otlp")]
impl TelemetryGuard {
    /// Whether records are being exported to a collector.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Flush pending records and stop the exporter.
    pub fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(err) = provider.shutdown() {
                tracing::warn!(error = %err, "Failed to flush telemetry exporter");
            }
        }
    }
}

#[cfg(not(feature = "otlp"))]
impl TelemetryGuard {
    pub fn is_exporting(&self) -> bool {
        false
    }

    pub fn shutdown(self) {}
}

/// Install the global subscriber and, when configured, the OTLP exporter.
pub fn init_tracing(config: &AppConfig) -> anyhow::Result<TelemetryGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.logging.level.clone()))
        .unwrap_or_else(|_| EnvFilter::new("item_catalog=info"));

    #[cfg(feature = "otlp")]
    let guard = TelemetryGuard {
        provider: if config.telemetry.enabled {
            Some(otlp::build_provider(&config.telemetry)?)
        } else {
            None
        },
    };
    #[cfg(not(feature = "otlp"))]
    let guard = TelemetryGuard::default();

    let registry = tracing_subscriber::registry().with(env_filter);

    #[cfg(feature = "otlp")]
    let registry = registry.with(guard.provider.as_ref().map(|p| otlp::layer(p)));

    let installed = match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).try_init(),
    };
    installed.context("failed to install tracing subscriber")?;

    if config.telemetry.enabled && !guard.is_exporting() {
        tracing::warn!(
            endpoint = %config.telemetry.endpoint,
            "Telemetry enabled but this build lacks the `otlp` feature; not exporting"
        );
    } else if guard.is_exporting() {
        tracing::info!(
            endpoint = %config.telemetry.endpoint,
            service_name = %config.telemetry.service_name,
            environment = %config.telemetry.environment,
            "Exporting logs over OTLP",
        );
    }

    Ok(guard)
}

#[cfg(feature = "otlp")]
mod otlp {
    use anyhow::{Context, Result};
    use opentelemetry::KeyValue;
    use opentelemetry_appender_tracing::layer::OpenTelemetryTracingBridge;
    use opentelemetry_otlp::{LogExporter, WithExportConfig};
    use opentelemetry_sdk::{logs::LoggerProvider, runtime, Resource};
    use tracing::Subscriber;
    use tracing_subscriber::{filter::filter_fn, registry::LookupSpan, Layer};

    use super::TelemetrySection;

    /// Crates the exporter itself logs through; bridging them would loop.
    const EXPORTER_TARGETS: &[&str] = &["h2", "hyper", "tonic", "tower", "opentelemetry"];

    pub(super) fn build_provider(section: &TelemetrySection) -> Result<LoggerProvider> {
        // A plain http:// endpoint gives an insecure (non-TLS) channel.
        let exporter = LogExporter::builder()
            .with_tonic()
            .with_endpoint(section.endpoint.clone())
            .build()
            .with_context(|| format!("failed to build OTLP exporter for {}", section.endpoint))?;

        let resource = Resource::new([
            KeyValue::new("service.name", section.service_name.clone()),
            KeyValue::new("deployment.environment", section.environment.clone()),
        ]);

        Ok(LoggerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter, runtime::Tokio)
            .build())
    }

    pub(super) fn layer<S>(provider: &LoggerProvider) -> impl Layer<S>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        OpenTelemetryTracingBridge::new(provider).with_filter(filter_fn(|meta| {
            !EXPORTER_TARGETS
                .iter()
                .any(|target| meta.target().starts_with(target))
        }))
    }
}
