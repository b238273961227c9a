//! Decoding AWS describe documents into records.
//!
//! A document is either the CLI's envelope object (`{"Vpcs": [...]}`) or a
//! bare array of records. Nested kinds are flattened: ASG instances come out
//! of their groups and EC2 instances out of their reservations.

use crate::kinds::asg::AutoScalingGroup;
use crate::kinds::ec2::Ec2Instance;
use crate::resource::{Kind, Resource};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no `{envelope}` array found in input for {kind} records")]
    MissingEnvelope { kind: Kind, envelope: &'static str },

    #[error("record {index} is not a valid {kind}: {source}")]
    Record {
        kind: Kind,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, SourceError>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct Reservation {
    instances: Vec<Ec2Instance>,
}

/// Parse `text` as a describe document holding records of `kind`.
pub fn parse_resources(kind: Kind, text: &str) -> Result<Vec<Resource>> {
    let document: Value = serde_json::from_str(text)?;
    let items = envelope_items(kind, document)?;

    let resources = match kind {
        Kind::AutoScalingGroup => decode(kind, items, Resource::AutoScalingGroup)?,
        Kind::AsgInstance => decode::<AutoScalingGroup, _>(kind, items, |g| g)?
            .iter()
            .flat_map(AutoScalingGroup::member_instances)
            .map(Resource::AsgInstance)
            .collect(),
        Kind::ScheduledAction => decode(kind, items, Resource::ScheduledAction)?,
        Kind::Ec2Instance => decode::<Reservation, _>(kind, items, |r| r)?
            .into_iter()
            .flat_map(|r| r.instances)
            .map(Resource::Ec2Instance)
            .collect(),
        Kind::LoadBalancer => decode(kind, items, Resource::LoadBalancer)?,
        Kind::TargetGroup => decode(kind, items, Resource::TargetGroup)?,
        Kind::Vpc => decode(kind, items, Resource::Vpc)?,
        Kind::Subnet => decode(kind, items, Resource::Subnet)?,
        Kind::Stack => decode(kind, items, Resource::Stack)?,
    };

    debug!(kind = %kind, count = resources.len(), "parsed records");
    Ok(resources)
}

fn envelope_items(kind: Kind, document: Value) -> Result<Vec<Value>> {
    let envelope = kind.envelope();
    match document {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove(envelope) {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Null) => Ok(Vec::new()),
            _ => Err(SourceError::MissingEnvelope { kind, envelope }),
        },
        _ => Err(SourceError::MissingEnvelope { kind, envelope }),
    }
}

fn decode<T: DeserializeOwned, O>(
    kind: Kind,
    items: Vec<Value>,
    wrap: impl Fn(T) -> O,
) -> Result<Vec<O>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<T>(item)
                .map(&wrap)
                .map_err(|source| SourceError::Record { kind, index, source })
        })
        .collect()
}
