//! Group provenance attributes
//!
//! Every table group carries the pytables-style trio (CLASS, TITLE, VERSION)
//! plus tool name, tool version, and a creation timestamp.

use chrono::Utc;
use hdf5::types::VarLenUnicode;
use hdf5::Group;
use serde::Serialize;

/// The fixed attribute set stamped on every table group
#[derive(Debug, Clone, Serialize)]
pub struct GroupAttrs {
    pub class: String,
    pub title: String,
    pub version: String,
    pub tool: String,
    pub tool_version: String,
    /// RFC 3339 UTC creation timestamp
    pub created: String,
}

impl GroupAttrs {
    /// Attributes for a run happening now
    pub fn current() -> Self {
        Self {
            class: "GROUP".to_string(),
            title: String::new(),
            version: "1.0".to_string(),
            tool: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            created: Utc::now().to_rfc3339(),
        }
    }

    /// Stamp the attributes onto a group
    pub fn apply(&self, group: &Group) -> hdf5::Result<()> {
        write_str_attr(group, "CLASS", &self.class)?;
        write_str_attr(group, "TITLE", &self.title)?;
        write_str_attr(group, "VERSION", &self.version)?;
        write_str_attr(group, "tool", &self.tool)?;
        write_str_attr(group, "tool_version", &self.tool_version)?;
        write_str_attr(group, "created", &self.created)?;
        Ok(())
    }
}

fn write_str_attr(group: &Group, name: &str, value: &str) -> hdf5::Result<()> {
    let value: VarLenUnicode = value
        .parse()
        .map_err(|e: hdf5::types::StringError| hdf5::Error::Internal(e.to_string()))?;
    group
        .new_attr::<VarLenUnicode>()
        .create(name)?
        .write_scalar(&value)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_attrs() {
        let attrs = GroupAttrs::current();
        assert_eq!(attrs.class, "GROUP");
        assert_eq!(attrs.tool, "h5frame");
        // RFC 3339 timestamps carry a date-time separator
        assert!(attrs.created.contains('T'));
    }
}
