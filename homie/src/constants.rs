/// Default base topic of the convention.
pub const DEFAULT_ROOT: &str = "homie";
/// Version of the Homie convention implemented by this crate.
pub const HOMIE_VERSION: &str = "4.0.0";

pub const ATTR_HOMIE: &str = "$homie";
pub const ATTR_NAME: &str = "$name";
pub const ATTR_STATE: &str = "$state";
pub const ATTR_NODES: &str = "$nodes";
pub const ATTR_EXTENSIONS: &str = "$extensions";
pub const ATTR_PROPERTIES: &str = "$properties";
pub const ATTR_TYPE: &str = "$type";
pub const ATTR_DATATYPE: &str = "$datatype";
pub const ATTR_FORMAT: &str = "$format";
pub const ATTR_UNIT: &str = "$unit";
pub const ATTR_SETTABLE: &str = "$settable";
pub const ATTR_RETAINED: &str = "$retained";

pub const SET_SUFFIX: &str = "set";
