//! Broker rendering.

use std::io::Write;

use kube::ResourceExt;
use serde::Serialize;

use super::status::{format_status_full, format_status_short};
use super::table::{DetailsTable, ListTable};
use super::{OutputFormat, write_json, write_yaml};
use crate::crd::{API_GROUP, API_VERSION, ClusterServiceBroker};
use crate::error::Result;

/// List document emitted for JSON and YAML output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokerList<'a> {
    pub api_version: String,
    pub kind: &'static str,
    pub items: &'a [ClusterServiceBroker],
}

impl<'a> BrokerList<'a> {
    pub fn new(items: &'a [ClusterServiceBroker]) -> Self {
        Self {
            api_version: format!("{}/{}", API_GROUP, API_VERSION),
            kind: "ClusterServiceBrokerList",
            items,
        }
    }
}

fn broker_list_table(brokers: &[ClusterServiceBroker]) -> String {
    let mut t = ListTable::new(&["Name", "URL", "Status"]);
    for broker in brokers {
        t.append(vec![
            broker.name_any(),
            broker.spec.url.clone(),
            format_status_short(broker.status.as_ref()),
        ]);
    }
    t.render()
}

/// Print a list of brokers in the requested format.
pub fn write_broker_list<W: Write>(
    w: &mut W,
    format: OutputFormat,
    brokers: &[ClusterServiceBroker],
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(w, &BrokerList::new(brokers)),
        OutputFormat::Yaml => write_yaml(w, &BrokerList::new(brokers)),
        OutputFormat::Table => {
            w.write_all(broker_list_table(brokers).as_bytes())?;
            Ok(())
        }
    }
}

/// Print a single broker. The table form is a one-row list.
pub fn write_broker<W: Write>(
    w: &mut W,
    format: OutputFormat,
    broker: &ClusterServiceBroker,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(w, broker),
        OutputFormat::Yaml => write_yaml(w, broker),
        OutputFormat::Table => write_broker_list(w, format, std::slice::from_ref(broker)),
    }
}

/// Print identifying information for the broker that owns another resource.
pub fn write_parent_broker<W: Write>(w: &mut W, broker: &ClusterServiceBroker) -> Result<()> {
    let mut t = DetailsTable::new();
    t.append_bulk([
        ("Name:".to_string(), broker.name_any()),
        ("Status:".to_string(), format_status_short(broker.status.as_ref())),
    ]);
    let out = format!("\nBroker:\n{}", t.render());
    w.write_all(out.as_bytes())?;
    Ok(())
}

/// Print details for a single broker, including the full status.
pub fn write_broker_details<W: Write>(w: &mut W, broker: &ClusterServiceBroker) -> Result<()> {
    let mut t = DetailsTable::new();
    t.append_bulk([
        ("Name:".to_string(), broker.name_any()),
        ("URL:".to_string(), broker.spec.url.clone()),
        ("Status:".to_string(), format_status_full(broker.status.as_ref())),
    ]);
    w.write_all(t.render().as_bytes())?;
    Ok(())
}
