//! Rendering of catalog resources for humans and scripts.
//!
//! Renderers assume their input already passed admission; they never
//! validate and never reject. Each call builds the full document in memory
//! and hands it to the writer in a single write.

mod broker;
mod status;
mod table;

pub use broker::{
    BrokerList, write_broker, write_broker_details, write_broker_list, write_parent_broker,
};
pub use status::{format_status_full, format_status_short};
pub use table::{DetailsTable, ListTable};

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};

/// Supported output formats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            other => Err(Error::UnknownOutputFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Pretty-printed JSON with a three-space indent.
fn write_json<W: Write, T: Serialize>(w: &mut W, value: &T) -> Result<()> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"   "));
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    w.write_all(&buf)?;
    Ok(())
}

fn write_yaml<W: Write, T: Serialize>(w: &mut W, value: &T) -> Result<()> {
    let doc = serde_yaml::to_string(value)?;
    w.write_all(doc.as_bytes())?;
    Ok(())
}
