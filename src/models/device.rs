use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A registered device.
///
/// Fields missing from an incoming JSON document take their zero value, and
/// unknown fields are ignored. Neither the MAC address nor the firmware version
/// is validated.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Device {
    pub id: i64,
    pub mac: String,
    pub firmware: String,
}

impl Device {
    pub fn new(id: i64, mac: impl Into<String>, firmware: impl Into<String>) -> Self {
        Device {
            id,
            mac: mac.into(),
            firmware: firmware.into(),
        }
    }

    /// Decodes one JSON document into a device.
    ///
    /// A `null` document yields the zero-valued device. Anything after the
    /// document other than whitespace is an error. Keys are case-sensitive.
    pub fn from_json(bytes: &[u8]) -> Result<Device, serde_json::Error> {
        Ok(serde_json::from_slice::<Option<Device>>(bytes)?.unwrap_or_default())
    }

    /// The records every fresh process starts with.
    pub fn seed() -> Vec<Device> {
        vec![
            Device::new(1, "5F-33-CC-1F-43-82", "2.1.6"),
            Device::new(2, "EF-2B-C4-F5-D6-34", "2.1.6"),
        ]
    }
}
