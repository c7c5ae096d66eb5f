use async_trait::async_trait;
use aws_sdk_ec2::types::Filter;
use aws_sdk_ec2::Client as Ec2Client;

use crate::action::InstanceAction;
use crate::error::BoxError;

/// The two EC2 operations the orchestration needs, kept narrow so the
/// dispatch logic can run against a substitute in tests.
#[async_trait]
pub trait InstanceProvider {
    /// Instance ids carrying the given tag, flattened across all
    /// reservations and all result pages.
    async fn instances_by_tag(&self, key: &str, value: &str) -> Result<Vec<String>, BoxError>;

    /// One bulk StartInstances or StopInstances call with the full id list.
    /// EC2 does not guarantee the bulk call is atomic.
    async fn set_power_state(&self, action: InstanceAction, ids: &[String])
        -> Result<(), BoxError>;
}

pub struct Ec2Instances {
    client: Ec2Client,
}

impl Ec2Instances {
    pub fn new(client: Ec2Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InstanceProvider for Ec2Instances {
    async fn instances_by_tag(&self, key: &str, value: &str) -> Result<Vec<String>, BoxError> {
        let mut pages = self
            .client
            .describe_instances()
            .filters(
                Filter::builder()
                    .name(format!("tag:{key}"))
                    .values(value)
                    .build(),
            )
            .into_paginator()
            .send();

        let mut instance_ids = Vec::new();
        while let Some(page) = pages.next().await {
            instance_ids.extend(
                page?
                    .reservations()
                    .iter()
                    .flat_map(|res| res.instances())
                    .filter_map(|inst| inst.instance_id().map(|id| id.to_string())),
            );
        }

        Ok(instance_ids)
    }

    async fn set_power_state(
        &self,
        action: InstanceAction,
        ids: &[String],
    ) -> Result<(), BoxError> {
        match action {
            InstanceAction::Start => {
                self.client
                    .start_instances()
                    .set_instance_ids(Some(ids.to_vec()))
                    .send()
                    .await?;
            }
            InstanceAction::Stop => {
                self.client
                    .stop_instances()
                    .set_instance_ids(Some(ids.to_vec()))
                    .send()
                    .await?;
            }
        }

        Ok(())
    }
}
