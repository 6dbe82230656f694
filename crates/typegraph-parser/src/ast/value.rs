/// A literal value as written in source.
///
/// Object fields keep their source order; duplicates are preserved here and
/// left for consumers to reject or collapse.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(String),
    Int(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Null,
    Enum(String),
    List(Vec<Value>),
    Object(Vec<(String, Value)>),
}
