use std::collections::hash_map::Entry;
use std::collections::HashMap;

use log::warn;

use crate::constants::{ATTR_NAME, ATTR_PROPERTIES, ATTR_TYPE};
use crate::error::Error;
use crate::id::is_valid_id;
use crate::property::Property;
use crate::sink::SharedSink;
use crate::topic::{join, sorted_id_list, TopicValuePair};
use crate::value::Datatype;

/// A logical part of a device, grouping related properties.
///
/// Created through [crate::Device::add_node].
pub struct Node {
    topic: String,
    id: String,
    name: String,
    node_type: String,
    properties: HashMap<String, Property>,
    device_sink: SharedSink,
}

impl Node {
    pub(crate) fn new(
        prefix: &str,
        id: &str,
        name: &str,
        node_type: &str,
        device_sink: SharedSink,
    ) -> Result<Self, Error> {
        if !is_valid_id(id) {
            return Err(Error::InvalidId(id.to_string()));
        }
        Ok(Self {
            topic: join(prefix, id),
            id: id.to_string(),
            name: name.to_string(),
            node_type: node_type.to_string(),
            properties: HashMap::new(),
            device_sink,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full topic of the node, `root/device/node`.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    /// Create a property and register it on this node, replacing any
    /// previous property with the same ID.
    pub fn add_property(
        &mut self,
        id: &str,
        name: &str,
        datatype: Datatype,
    ) -> Result<&mut Property, Error> {
        let property = Property::new(&self.topic, id, name, datatype, self.device_sink.clone())?;
        match self.properties.entry(id.to_string()) {
            Entry::Occupied(entry) => {
                warn!("node {}: replacing existing property '{}'", self.topic, id);
                let slot = entry.into_mut();
                *slot = property;
                Ok(slot)
            }
            Entry::Vacant(entry) => Ok(entry.insert(property)),
        }
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.properties.get(id)
    }

    pub fn property_mut(&mut self, id: &str) -> Option<&mut Property> {
        self.properties.get_mut(id)
    }

    /// Attribute pairs for this node followed by those of all of its
    /// properties. `$properties` is the ascending-sorted id list.
    pub fn attributes(&self) -> Vec<TopicValuePair> {
        let mut attributes = Vec::with_capacity(3 + 6 * self.properties.len());
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_NAME),
            self.name.clone(),
        ));
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_TYPE),
            self.node_type.clone(),
        ));
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_PROPERTIES),
            sorted_id_list(&self.properties),
        ));
        for property in self.properties.values() {
            attributes.extend(property.attributes());
        }
        attributes
    }

    /// One value pair per property, in no particular order.
    pub fn values(&self) -> Vec<TopicValuePair> {
        self.properties.values().map(Property::value_pair).collect()
    }

    /// Settable properties keyed by their `/set` topic.
    pub fn setter_properties(&self) -> HashMap<String, &Property> {
        self.properties
            .values()
            .filter_map(|property| property.setter_topic().map(|topic| (topic, property)))
            .collect()
    }
}
