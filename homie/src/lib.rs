//! Device description and topic/value serialization for the
//! [Homie](https://homieiot.github.io/) IoT convention.
//!
//! A [Device] owns [Node]s, which own [Property]s; the tree serializes
//! into topic/value pairs ready for publication over MQTT or any other
//! pub/sub transport, through a caller-provided [Sink].

pub mod constants;

mod device;
mod error;
mod id;
mod node;
mod property;
mod sink;
mod topic;
mod value;

pub use device::{Device, DeviceBuilder, DeviceState};
pub use error::Error;
pub use id::is_valid_id;
pub use node::Node;
pub use property::Property;
pub use sink::Sink;
pub use topic::TopicValuePair;
pub use value::{Datatype, Value};
