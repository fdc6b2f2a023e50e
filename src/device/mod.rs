//! Simulated client device
//!
//! Every request the client sends carries the metadata of one simulated
//! Android device. The [`DeviceIdentityProvider`] trait is the injection point
//! for that identity; [`DeviceBuilder`] is the default implementation.

pub mod builder;
pub mod identity;
pub mod profiles;

pub use builder::{DeviceBuilder, DeviceIdentityProvider, DeviceParameters, StaticDeviceProvider};
pub use identity::{DeviceIdentity, DeviceProfile};
