//! The sketch catalog: one data-driven table consumed by the generic menu
//! renderer, instead of a dispatch map per menu.

/// One selectable entry in a category menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// Uploads a sketch to the attached board.
    Sketch {
        label: &'static str,
        file: &'static str,
    },
    /// Placeholder with no firmware behind it yet.
    Stub { label: &'static str },
}

impl MenuItem {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sketch { label, .. } | Self::Stub { label } => label,
        }
    }
}

/// A research category shown on the main menu.
pub struct Category {
    pub title: &'static str,
    pub items: &'static [MenuItem],
}

const fn sketch(label: &'static str, file: &'static str) -> MenuItem {
    MenuItem::Sketch { label, file }
}

const fn stub(label: &'static str) -> MenuItem {
    MenuItem::Stub { label }
}

pub const CATALOG: &[Category] = &[
    Category {
        title: "WiFi Research",
        items: &[
            sketch("Hidden SSID Detector", "hidden_ssid.ino"),
            sketch("RSSI Monitor", "rssi_monitor.ino"),
            sketch("Channel Utilization Monitor", "channel_util.ino"),
            sketch("Packet Rate Analyzer", "packet_rate.ino"),
            sketch("MAC Randomization Tool", "mac_randomizer.ino"),
            sketch("Beacon Frame Analyzer", "beacon_analyzer.ino"),
            sketch("WiFi Signal Logger (CSV)", "wifi_logger.ino"),
            sketch("Client Counter", "client_counter.ino"),
            sketch("Rogue AP Detector (Defensive)", "rogue_ap_detector.ino"),
        ],
    },
    Category {
        title: "BLE Research",
        items: &[
            sketch("BLE Device Scanner", "ble_scanner.ino"),
            sketch("BLE Advertisement Logger", "ble_adv_logger.ino"),
            sketch("BLE Service Enumerator", "ble_service_enum.ino"),
            sketch("BLE Signal Strength Tracker", "ble_rssi_tracker.ino"),
            sketch("BLE UUID Filter", "ble_uuid_filter.ino"),
            sketch("BLE Battery Service Monitor", "ble_battery_monitor.ino"),
            sketch("BLE Device Classifier", "ble_device_classifier.ino"),
            sketch("BLE Connection Logger", "ble_connection_logger.ino"),
            sketch("BLE GATT Explorer", "ble_gatt_explorer.ino"),
        ],
    },
    Category {
        title: "RFID / NFC Research",
        items: &[
            sketch("RFID Card Reader", "rfid_card_reader.ino"),
            sketch("RFID UID Logger", "rfid_uid_logger.ino"),
            sketch("NFC Tag Analyzer", "nfc_tag_analyzer.ino"),
            sketch("NFC NDEF Parser", "nfc_ndef_parser.ino"),
            sketch("NFC Signal Strength Monitor", "nfc_signal_monitor.ino"),
            sketch("RFID Frequency Tester", "rfid_frequency_tester.ino"),
            sketch("Tag Type Identifier", "tag_type_identifier.ino"),
            sketch("NFC Data Dumper (Lab)", "nfc_data_dumper.ino"),
            sketch("Tag Emulation (Lab Only)", "tag_emulation_lab.ino"),
        ],
    },
    Category {
        title: "Infrared Research",
        items: &[
            stub("IR Signal Recorder"),
            stub("IR Signal Replayer (Own Devices)"),
            stub("IR Protocol Analyzer"),
            stub("IR Waveform Visualizer"),
            stub("IR Frequency Tester"),
            stub("IR Remote Database Builder"),
            stub("IR Learning Mode"),
        ],
    },
    Category {
        title: "GPIO / Hardware Testing",
        items: &[
            stub("GPIO Voltage Monitor"),
            stub("PWM Signal Generator"),
            stub("I2C Scanner"),
            stub("SPI Device Detector"),
            stub("UART Monitor"),
            stub("ADC Sampler"),
            stub("Logic Level Tester"),
        ],
    },
];
