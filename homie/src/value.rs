use std::fmt;

/// Declared datatype of a property.
///
/// The variant names render in lowercase on the `$datatype` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Datatype {
    Integer,
    Float,
    Boolean,
    String,
    Enum,
    Color,
}

impl Datatype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Datatype::Integer => "integer",
            Datatype::Float => "float",
            Datatype::Boolean => "boolean",
            Datatype::String => "string",
            Datatype::Enum => "enum",
            Datatype::Color => "color",
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that can be rendered to its canonical payload string.
///
/// Booleans render as `"true"`/`"false"`, integers as base-10 decimal,
/// floats with their shortest decimal representation, strings verbatim.
pub trait Value {
    fn render(&self) -> String;
}

macro_rules! impl_value_for_primitive {
    ($($primitive:ty),*) => {
        $(
            impl Value for $primitive {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_value_for_primitive!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Value for &str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

impl Value for String {
    fn render(&self) -> String {
        self.clone()
    }
}
