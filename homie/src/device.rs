use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::constants::{
    ATTR_EXTENSIONS, ATTR_HOMIE, ATTR_NAME, ATTR_NODES, ATTR_STATE, DEFAULT_ROOT, HOMIE_VERSION,
};
use crate::error::Error;
use crate::id::is_valid_id;
use crate::node::Node;
use crate::property::Property;
use crate::sink::{SharedSink, Sink};
use crate::topic::{join, sorted_id_list, TopicValuePair};
use crate::value::Datatype;

/// Lifecycle state advertised on the device `$state` topic.
///
/// Any state can follow any other; following the convention's
/// recommended lifecycle is up to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DeviceState {
    Init,
    Ready,
    Disconnected,
    Sleeping,
    Lost,
    Alert,
}

impl DeviceState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceState::Init => "init",
            DeviceState::Ready => "ready",
            DeviceState::Disconnected => "disconnected",
            DeviceState::Sleeping => "sleeping",
            DeviceState::Lost => "lost",
            DeviceState::Alert => "alert",
        }
    }
}

impl fmt::Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A builder for creating and configuring [Device] instances.
///
/// The root topic segment and protocol version are fixed here, before
/// any child exists, so descendant topics can never go stale.
pub struct DeviceBuilder {
    id: String,
    name: String,
    root: String,
    version: String,
}

impl DeviceBuilder {
    /// Creates a builder with the default root (`homie`) and protocol
    /// version.
    pub fn new<I: Into<String>, N: Into<String>>(id: I, name: N) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            root: DEFAULT_ROOT.to_string(),
            version: HOMIE_VERSION.to_string(),
        }
    }

    /// Overrides the root topic segment. The root is a topic prefix, not
    /// an ID, so it may contain slashes.
    pub fn with_root<S: Into<String>>(mut self, root: S) -> Self {
        self.root = root.into();
        self
    }

    /// Overrides the `$homie` protocol version string.
    pub fn with_version<S: Into<String>>(mut self, version: S) -> Self {
        self.version = version.into();
        self
    }

    /// Builds the device. Returns [Error::InvalidId] if the device ID
    /// cannot be used as a topic segment.
    pub fn build(self) -> Result<Device, Error> {
        if !is_valid_id(&self.id) {
            return Err(Error::InvalidId(self.id));
        }
        Ok(Device {
            topic: join(&self.root, &self.id),
            id: self.id,
            name: self.name,
            version: self.version,
            state: DeviceState::Init,
            sink: SharedSink::default(),
            nodes: HashMap::new(),
        })
    }
}

/// The root of a Homie description tree, owning all of its nodes.
///
/// A device is built once at configuration time, serialized with
/// [Device::homie_attributes] (once, or again on topology change), and
/// then driven through [Property::set] and [Device::set_state] for the
/// lifetime of the process. The tree is single-threaded: every
/// publication happens inline on the calling thread.
pub struct Device {
    topic: String,
    id: String,
    name: String,
    version: String,
    state: DeviceState,
    sink: SharedSink,
    nodes: HashMap<String, Node>,
}

impl Device {
    /// Create a device with the default root topic and protocol version.
    pub fn new(id: &str, name: &str) -> Result<Self, Error> {
        DeviceBuilder::new(id, name).build()
    }

    /// Start building a device with a custom root or version.
    pub fn builder<I: Into<String>, N: Into<String>>(id: I, name: N) -> DeviceBuilder {
        DeviceBuilder::new(id, name)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full topic of the device, `root/device`.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn state(&self) -> DeviceState {
        self.state
    }

    /// Transition to a new lifecycle state and publish it through the
    /// device-level sink, if one is installed.
    pub fn set_state(&mut self, state: DeviceState) -> &mut Self {
        self.state = state;
        debug!("device {}: state set to '{}'", self.topic, state);
        if let Some(sink) = self.sink.borrow_mut().as_mut() {
            sink.publish(&self.state_topic(), state.as_str(), Datatype::String);
        }
        self
    }

    /// Create a node and register it on this device, replacing any
    /// previous node with the same ID.
    pub fn add_node(&mut self, id: &str, name: &str, node_type: &str) -> Result<&mut Node, Error> {
        let node = Node::new(&self.topic, id, name, node_type, self.sink.clone())?;
        match self.nodes.entry(id.to_string()) {
            Entry::Occupied(entry) => {
                warn!("device {}: replacing existing node '{}'", self.topic, id);
                let slot = entry.into_mut();
                *slot = node;
                Ok(slot)
            }
            Entry::Vacant(entry) => Ok(entry.insert(node)),
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Every attribute pair describing the device and its whole tree.
    ///
    /// The result is a set: consumers must not rely on pair order.
    /// `$nodes` is the ascending-sorted id list and `$extensions` is
    /// always empty.
    pub fn homie_attributes(&self) -> Vec<TopicValuePair> {
        let mut attributes = Vec::with_capacity(5 + 20 * self.nodes.len());
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_HOMIE),
            self.version.clone(),
        ));
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_NAME),
            self.name.clone(),
        ));
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_STATE),
            self.state.as_str(),
        ));
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_NODES),
            sorted_id_list(&self.nodes),
        ));
        attributes.push(TopicValuePair::new(join(&self.topic, ATTR_EXTENSIONS), ""));
        for node in self.nodes.values() {
            attributes.extend(node.attributes());
        }
        attributes
    }

    /// Current values of every property across all nodes.
    pub fn values(&self) -> Vec<TopicValuePair> {
        self.nodes.values().flat_map(Node::values).collect()
    }

    /// Topic of the device `$state` attribute.
    pub fn state_topic(&self) -> String {
        join(&self.topic, ATTR_STATE)
    }

    /// The device state as a topic/value pair.
    pub fn state_pair(&self) -> TopicValuePair {
        TopicValuePair::new(self.state_topic(), self.state.as_str())
    }

    /// Settable properties across all nodes, keyed by their `/set`
    /// topic. Topics cannot collide between nodes since every property
    /// topic is prefixed by its own node.
    pub fn property_setters(&self) -> HashMap<String, &Property> {
        self.nodes
            .values()
            .flat_map(Node::setter_properties)
            .collect()
    }

    /// Install the device-level sink, used by [Device::set_state] and by
    /// every property without a sink of its own.
    pub fn on_set<S: Sink + 'static>(&mut self, sink: S) -> &mut Self {
        *self.sink.borrow_mut() = Some(Box::new(sink));
        self
    }

    /// Remove the device-level sink.
    pub fn clear_on_set(&mut self) -> &mut Self {
        *self.sink.borrow_mut() = None;
        self
    }
}
