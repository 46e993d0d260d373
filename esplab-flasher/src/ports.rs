//! Serial device enumeration and bridge matching.
//!
//! The device table is queried fresh on every scan; nothing is cached
//! between upload attempts.

use tracing::warn;

/// A serial device as reported by the operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortDescriptor {
    /// Path used to open the device, e.g. `/dev/ttyUSB0` or `COM3`.
    pub path: String,
    /// Human-readable description supplied by the OS. Empty for ports
    /// without USB metadata.
    pub description: String,
}

/// Source of serial device listings.
///
/// The live implementation is [`SystemPorts`]; tests substitute a fixed
/// list.
pub trait PortScan {
    fn scan(&self) -> Vec<PortDescriptor>;
}

/// Enumerates serial devices through the operating system's device table.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPorts;

impl PortScan for SystemPorts {
    fn scan(&self) -> Vec<PortDescriptor> {
        let ports = match serialport::available_ports() {
            Ok(x) => x,
            Err(e) => {
                warn!("Serial enumeration failed: {e}");
                return Vec::new();
            }
        };

        ports
            .into_iter()
            .map(|p| {
                let description = match p.port_type {
                    serialport::SerialPortType::UsbPort(usb) => usb.product.unwrap_or_default(),
                    _ => String::new(),
                };

                PortDescriptor {
                    path: p.port_name,
                    description,
                }
            })
            .collect()
    }
}

/// Returns the first descriptor whose description contains any of the
/// keywords. Matching is substring based and case sensitive; list order
/// breaks ties.
pub fn first_match<'a>(
    ports: &'a [PortDescriptor],
    keywords: &[String],
) -> Option<&'a PortDescriptor> {
    ports
        .iter()
        .find(|p| keywords.iter().any(|k| p.description.contains(k.as_str())))
}
