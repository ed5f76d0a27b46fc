//! Literal and object values
//!
//! A property value is either a literal or an IRI reference to another
//! entity. Literals carry their value in a type-appropriate variant; the
//! `Json` variant stores a canonical normalized JSON string (sorted keys,
//! minimal separators) so that equality and output stay deterministic.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::hash::{Hash, Hasher};

/// Literal value storage
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Literal {
    /// String value (UTF-8), rendered as a plain Turtle string
    String(String),
    /// Boolean value, rendered as a bare `true`/`false` token
    Boolean(bool),
    /// Integer value (i64 range), rendered as a bare numeric token
    Integer(i64),
    /// Floating point value, rendered as a typed `xsd:double` literal
    Double(f64),
    /// JSON value stored as a canonical normalized string (`rdf:JSON`)
    Json(String),
}

impl Literal {
    /// Create a string literal
    pub fn string(s: impl Into<String>) -> Self {
        Literal::String(s.into())
    }

    /// Create a JSON literal from an arbitrary JSON value
    ///
    /// The value is normalized to a canonical string: object keys sorted,
    /// no insignificant whitespace.
    pub fn json(value: &JsonValue) -> Self {
        let mut out = String::new();
        write_canonical(value, &mut out);
        Literal::Json(out)
    }

    /// Get the lexical representation of this value
    pub fn lexical(&self) -> String {
        match self {
            Literal::String(s) => s.clone(),
            Literal::Boolean(b) => b.to_string(),
            Literal::Integer(i) => i.to_string(),
            Literal::Double(d) => {
                if d.is_nan() {
                    "NaN".to_string()
                } else if d.is_infinite() {
                    if d.is_sign_positive() {
                        "INF".to_string()
                    } else {
                        "-INF".to_string()
                    }
                } else {
                    d.to_string()
                }
            }
            Literal::Json(s) => s.clone(),
        }
    }

    /// Try to get as string reference
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) => Some(s),
            _ => None,
        }
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::String(a), Literal::String(b)) => a == b,
            (Literal::Boolean(a), Literal::Boolean(b)) => a == b,
            (Literal::Integer(a), Literal::Integer(b)) => a == b,
            (Literal::Double(a), Literal::Double(b)) => a.to_bits() == b.to_bits(),
            (Literal::Json(a), Literal::Json(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Literal::String(s) => s.hash(state),
            Literal::Boolean(b) => b.hash(state),
            Literal::Integer(i) => i.hash(state),
            Literal::Double(d) => d.to_bits().hash(state),
            Literal::Json(s) => s.hash(state),
        }
    }
}

/// A property value: literal or reference to another entity
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// A literal value
    Literal(Literal),
    /// An IRI reference (expanded form)
    Ref(String),
}

impl Value {
    /// Create an IRI reference value
    pub fn reference(iri: impl Into<String>) -> Self {
        Value::Ref(iri.into())
    }

    /// Try to get as reference IRI
    pub fn as_ref_iri(&self) -> Option<&str> {
        match self {
            Value::Ref(iri) => Some(iri),
            _ => None,
        }
    }

    /// Try to get as literal
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            _ => None,
        }
    }
}

impl From<Literal> for Value {
    fn from(lit: Literal) -> Self {
        Value::Literal(lit)
    }
}

/// Serialize a JSON value in canonical form: keys sorted, no whitespace.
fn write_canonical(value: &JsonValue, out: &mut String) {
    match value {
        JsonValue::Object(map) => {
            out.push('{');
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&JsonValue::String((*key).clone()).to_string());
                out.push(':');
                write_canonical(&map[*key], out);
            }
            out.push('}');
        }
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}
