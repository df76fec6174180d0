use std::sync::Once;

use metrics::{Unit, describe_counter, describe_gauge};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;
use super::store::{
    METRIC_POSTS_CREATED, METRIC_POSTS_DELETED, METRIC_POSTS_STORED, METRIC_POSTS_UPDATED,
};

static METRIC_DESCRIPTIONS: Once = Once::new();

/// Install a global tracing subscriber using the provided logging settings.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    describe_metrics();

    let env_filter = EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .from_env_lossy();

    let fmt_layer = match logging.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .boxed(),
        LogFormat::Compact => fmt::layer().compact().with_target(true).boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(ErrorLayer::default())
        .with(fmt_layer)
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

/// Register metric metadata with whichever recorder the embedder installed.
pub fn describe_metrics() {
    METRIC_DESCRIPTIONS.call_once(|| {
        describe_counter!(
            METRIC_POSTS_CREATED,
            Unit::Count,
            "Total number of posts created."
        );
        describe_counter!(
            METRIC_POSTS_UPDATED,
            Unit::Count,
            "Total number of posts overwritten by an update."
        );
        describe_counter!(
            METRIC_POSTS_DELETED,
            Unit::Count,
            "Total number of posts deleted."
        );
        describe_gauge!(
            METRIC_POSTS_STORED,
            Unit::Count,
            "Current number of posts held in memory."
        );
    });
}
