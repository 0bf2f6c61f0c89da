use std::cell::RefCell;
use std::rc::Rc;

use crate::value::Datatype;

/// Receives every published topic/value pair.
///
/// This is the boundary to the transport layer: the device tree decides
/// what to publish and when, the sink decides how. Sinks are invoked
/// synchronously on the calling thread before `set`/`set_state` return,
/// and must not call back into the same device tree.
///
/// Any `FnMut(&str, &str, Datatype)` closure is a sink:
///
/// ```
/// use homie::{Datatype, Device};
///
/// let mut device = Device::new("clock", "Clock").unwrap();
/// device.on_set(|topic: &str, value: &str, _datatype: Datatype| {
///     println!("{topic} = {value}");
/// });
/// ```
pub trait Sink {
    fn publish(&mut self, topic: &str, value: &str, datatype: Datatype);
}

impl<F> Sink for F
where
    F: FnMut(&str, &str, Datatype),
{
    fn publish(&mut self, topic: &str, value: &str, datatype: Datatype) {
        self(topic, value, datatype)
    }
}

/// Device-level fallback sink, cloned into every node and property of
/// the tree at construction. Non-owning link back to the device sink
/// without a parent pointer.
pub(crate) type SharedSink = Rc<RefCell<Option<Box<dyn Sink>>>>;
