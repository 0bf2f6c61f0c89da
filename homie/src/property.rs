use log::debug;

use crate::constants::{
    ATTR_DATATYPE, ATTR_FORMAT, ATTR_NAME, ATTR_RETAINED, ATTR_SETTABLE, ATTR_UNIT, SET_SUFFIX,
};
use crate::error::Error;
use crate::id::is_valid_id;
use crate::sink::{SharedSink, Sink};
use crate::topic::{join, TopicValuePair};
use crate::value::{Datatype, Value};

/// A single typed value exposed by a node.
///
/// Created through [crate::Node::add_property]. Metadata mutators return
/// `&mut Self` for chaining.
pub struct Property {
    topic: String,
    id: String,
    name: String,
    datatype: Datatype,
    format: String,
    unit: String,
    settable: bool,
    retained: bool,
    value: String,
    sink: Option<Box<dyn Sink>>,
    device_sink: SharedSink,
}

impl Property {
    pub(crate) fn new(
        prefix: &str,
        id: &str,
        name: &str,
        datatype: Datatype,
        device_sink: SharedSink,
    ) -> Result<Self, Error> {
        if !is_valid_id(id) {
            return Err(Error::InvalidId(id.to_string()));
        }
        Ok(Self {
            topic: join(prefix, id),
            id: id.to_string(),
            name: name.to_string(),
            datatype,
            format: String::new(),
            unit: String::new(),
            settable: false,
            retained: true,
            value: String::new(),
            sink: None,
            device_sink,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Full topic of the property value, `root/device/node/property`.
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn datatype(&self) -> Datatype {
        self.datatype
    }

    /// Last value stored by [Property::set], empty until the first set.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Store a new value and notify the configured sink with the
    /// property topic, the rendered value and the declared datatype.
    ///
    /// The property-local sink takes precedence over the device-level
    /// one; with neither installed the value is only stored.
    pub fn set<V: Value>(&mut self, value: V) -> &mut Self {
        self.value = value.render();
        debug!("property {}: set to '{}'", self.topic, self.value);
        if let Some(sink) = &mut self.sink {
            sink.publish(&self.topic, &self.value, self.datatype);
        } else if let Some(sink) = self.device_sink.borrow_mut().as_mut() {
            sink.publish(&self.topic, &self.value, self.datatype);
        }
        self
    }

    /// Declare whether the property accepts commands on its `/set` topic.
    pub fn settable(&mut self, settable: bool) -> &mut Self {
        self.settable = settable;
        self
    }

    pub fn set_unit<S: Into<String>>(&mut self, unit: S) -> &mut Self {
        self.unit = unit.into();
        self
    }

    pub fn set_format<S: Into<String>>(&mut self, format: S) -> &mut Self {
        self.format = format.into();
        self
    }

    pub fn set_retained(&mut self, retained: bool) -> &mut Self {
        self.retained = retained;
        self
    }

    /// Install a property-local sink, used instead of the device-level
    /// one for this property.
    pub fn on_set<S: Sink + 'static>(&mut self, sink: S) -> &mut Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Remove the property-local sink, falling back to the device-level
    /// one.
    pub fn clear_on_set(&mut self) -> &mut Self {
        self.sink = None;
        self
    }

    /// Topic accepting set commands, `None` unless the property is
    /// settable.
    pub fn setter_topic(&self) -> Option<String> {
        if self.settable {
            Some(join(&self.topic, SET_SUFFIX))
        } else {
            None
        }
    }

    /// The property value as a topic/value pair.
    pub fn value_pair(&self) -> TopicValuePair {
        TopicValuePair::new(self.topic.clone(), self.value.clone())
    }

    /// Attribute pairs describing this property.
    ///
    /// `$name` and `$datatype` are always emitted; `$format` and `$unit`
    /// only when non-empty; `$settable` and `$retained` only when they
    /// differ from their defaults (false and true respectively).
    pub fn attributes(&self) -> Vec<TopicValuePair> {
        let mut attributes = Vec::with_capacity(6);
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_NAME),
            self.name.clone(),
        ));
        attributes.push(TopicValuePair::new(
            join(&self.topic, ATTR_DATATYPE),
            self.datatype.as_str(),
        ));
        if !self.format.is_empty() {
            attributes.push(TopicValuePair::new(
                join(&self.topic, ATTR_FORMAT),
                self.format.clone(),
            ));
        }
        if !self.unit.is_empty() {
            attributes.push(TopicValuePair::new(
                join(&self.topic, ATTR_UNIT),
                self.unit.clone(),
            ));
        }
        if self.settable {
            attributes.push(TopicValuePair::new(join(&self.topic, ATTR_SETTABLE), "true"));
        }
        if !self.retained {
            attributes.push(TopicValuePair::new(join(&self.topic, ATTR_RETAINED), "false"));
        }
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SharedSink;

    fn lone_property(datatype: Datatype) -> Property {
        Property::new("test", "id", "name", datatype, SharedSink::default()).unwrap()
    }

    #[test]
    fn test_default_attributes() {
        let property = lone_property(Datatype::String);
        let attributes = property.attributes();
        assert_eq!(
            attributes,
            vec![
                TopicValuePair::new("test/id/$name", "name"),
                TopicValuePair::new("test/id/$datatype", "string"),
            ]
        );
    }

    #[test]
    fn test_non_default_attributes() {
        let mut property = lone_property(Datatype::Float);
        property
            .set_unit("°C")
            .set_format("-40:85")
            .settable(true)
            .set_retained(false);
        let mut attributes = property.attributes();
        attributes.sort();
        let mut expected = vec![
            TopicValuePair::new("test/id/$name", "name"),
            TopicValuePair::new("test/id/$datatype", "float"),
            TopicValuePair::new("test/id/$format", "-40:85"),
            TopicValuePair::new("test/id/$unit", "°C"),
            TopicValuePair::new("test/id/$settable", "true"),
            TopicValuePair::new("test/id/$retained", "false"),
        ];
        expected.sort();
        assert_eq!(attributes, expected);
    }

    #[test]
    fn test_boolean_value() {
        let mut property = lone_property(Datatype::Boolean);
        property.set(false);
        assert_eq!(property.value_pair(), TopicValuePair::new("test/id", "false"));
        property.set(true);
        assert_eq!(property.value_pair(), TopicValuePair::new("test/id", "true"));
    }

    #[test]
    fn test_unset_value_is_empty() {
        let property = lone_property(Datatype::Integer);
        assert_eq!(property.value_pair(), TopicValuePair::new("test/id", ""));
    }

    #[test]
    fn test_setter_topic() {
        let mut property = lone_property(Datatype::Boolean);
        assert_eq!(property.setter_topic(), None);
        property.settable(true);
        assert_eq!(property.setter_topic(), Some("test/id/set".to_string()));
    }

    #[test]
    fn test_invalid_id() {
        let result = Property::new("test", "bad id", "name", Datatype::String, SharedSink::default());
        assert!(matches!(result, Err(Error::InvalidId(id)) if id == "bad id"));
    }
}
