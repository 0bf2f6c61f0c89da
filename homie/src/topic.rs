use std::collections::HashMap;

/// A topic and the value published to it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TopicValuePair {
    pub topic: String,
    pub value: String,
}

impl TopicValuePair {
    pub fn new<T: Into<String>, V: Into<String>>(topic: T, value: V) -> Self {
        Self {
            topic: topic.into(),
            value: value.into(),
        }
    }
}

pub(crate) fn join(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{}/{}", prefix, segment)
    }
}

/// Comma-joined, ascending-sorted list of the map's keys. The registries
/// themselves are unordered; only this published list is deterministic.
pub(crate) fn sorted_id_list<V>(registry: &HashMap<String, V>) -> String {
    let mut ids: Vec<&str> = registry.keys().map(String::as_str).collect();
    ids.sort_unstable();
    ids.join(",")
}
