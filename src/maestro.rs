use aws_config::BehaviorVersion;
use aws_lambda_events::event::cloudwatch_events::CloudWatchEvent;
use aws_sdk_ec2::Client as Ec2Client;
use serde_json::Value;
use tracing::info;

use crate::action::InstanceAction;
use crate::ec2::{Ec2Instances, InstanceProvider};
use crate::error::MaestroError;

/// Tag marking an instance as managed by this handler.
pub const MANAGED_TAG_KEY: &str = "ec2maestro";
pub const MANAGED_TAG_VALUE: &str = "yes";

/// Request-scoped orchestrator: one `Maestro` per invocation, holding the
/// provider handle and the action requested by the inbound event. Nothing
/// survives the invocation.
pub struct Maestro<P> {
    provider: P,
    action: String,
}

impl Maestro<Ec2Instances> {
    /// Build an EC2-backed maestro from the ambient AWS environment
    /// (environment variables, instance role, or local profile) and the
    /// inbound scheduled event.
    pub async fn from_event(event: &CloudWatchEvent<Value>) -> Result<Self, MaestroError> {
        let config = aws_config::defaults(BehaviorVersion::v2024_03_28())
            .load()
            .await;
        if config.region().is_none() {
            return Err(MaestroError::Configuration(
                "no AWS region resolved from the environment".to_string(),
            ));
        }

        let detail_type = event.detail_type.as_deref().unwrap_or_default();
        Ok(Self::with_provider(
            Ec2Instances::new(Ec2Client::new(&config)),
            detail_type,
        ))
    }
}

impl<P: InstanceProvider> Maestro<P> {
    pub fn with_provider(provider: P, detail_type: &str) -> Self {
        Self {
            provider,
            action: detail_type.to_lowercase(),
        }
    }

    /// Resolve the requested action. Must succeed before any dispatch.
    pub fn validate(&self) -> Result<InstanceAction, MaestroError> {
        self.action.parse()
    }

    /// Discover the managed fleet and issue one bulk start or stop call.
    /// Zero discovered instances is a valid no-op, not an error.
    pub async fn dispatch(&self, action: InstanceAction) -> Result<(), MaestroError> {
        let instance_ids = self
            .provider
            .instances_by_tag(MANAGED_TAG_KEY, MANAGED_TAG_VALUE)
            .await
            .map_err(|source| MaestroError::Discovery { source })?;

        if instance_ids.is_empty() {
            info!("no instances found for {action} action");
            return Ok(());
        }

        self.provider
            .set_power_state(action, &instance_ids)
            .await
            .map_err(|source| MaestroError::Action { action, source })?;

        info!(
            "successfully executed {action} action on {} instances",
            instance_ids.len()
        );

        Ok(())
    }
}
