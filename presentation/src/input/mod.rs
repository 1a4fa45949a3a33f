//! Console stand-ins for the kiosk's physical inputs

pub mod keys;
