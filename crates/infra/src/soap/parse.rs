//! Response envelope reader
//!
//! Turns the XML body into a `serde_json::Value` tree:
//! - namespace prefixes are dropped from element names;
//! - leaf elements become strings, `xsi:nil` elements become null;
//! - a name that occurs more than once under the same parent becomes an
//!   array, a single occurrence stays bare.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use responsys_domain::Fault;
use serde_json::{Map, Value};

use super::EnvelopeError;

/// Decoded SOAP body.
#[derive(Debug, Clone, PartialEq)]
pub enum SoapBody {
    /// The operation's response element (`{ "result": ... }` for most
    /// operations).
    Response(Value),
    Fault(Fault),
}

/// Parse a response envelope.
pub fn parse_response(xml: &str) -> Result<SoapBody, EnvelopeError> {
    let (_, root) = parse_tree(xml)?;
    let body = root.get("Body").ok_or(EnvelopeError::MissingBody)?;

    if let Some(fault) = body.get("Fault") {
        return Ok(SoapBody::Fault(fault_from(fault)));
    }

    let response = match body {
        Value::Object(children) => children.values().next().cloned().unwrap_or(Value::Null),
        _ => Value::Null,
    };
    Ok(SoapBody::Response(response))
}

/// Parse a whole document into (root element name, root value).
pub fn parse_tree(xml: &str) -> Result<(String, Value), EnvelopeError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event().map_err(|e| EnvelopeError::Xml(e.to_string()))? {
            Event::Start(start) => stack.push(Frame::open(&start)),
            Event::Empty(start) => {
                let frame = Frame::open(&start);
                if let Some(done) = close(&mut stack, frame) {
                    return Ok(done);
                }
            }
            Event::Text(text) => {
                if let Some(frame) = stack.last_mut() {
                    let text = text.unescape().map_err(|e| EnvelopeError::Xml(e.to_string()))?;
                    frame.text.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(frame) = stack.last_mut() {
                    frame.text.push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| EnvelopeError::Xml("unbalanced closing tag".into()))?;
                if let Some(done) = close(&mut stack, frame) {
                    return Ok(done);
                }
            }
            Event::Eof => return Err(EnvelopeError::Xml("unexpected end of document".into())),
            _ => {}
        }
    }
}

struct Frame {
    name: String,
    nil: bool,
    text: String,
    children: Map<String, Value>,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Self {
        let name = local_name(start.name().as_ref());
        let nil = start.attributes().flatten().any(|attr| {
            local_name(attr.key.as_ref()) == "nil" && attr.value.as_ref() == b"true"
        });
        Self { name, nil, text: String::new(), children: Map::new() }
    }

    fn into_value(self) -> Value {
        if self.nil {
            Value::Null
        } else if self.children.is_empty() {
            Value::String(self.text)
        } else {
            Value::Object(self.children)
        }
    }
}

/// Attach a finished element to its parent; returns the root once the
/// outermost element closes.
fn close(stack: &mut [Frame], frame: Frame) -> Option<(String, Value)> {
    let name = frame.name.clone();
    let value = frame.into_value();

    match stack.last_mut() {
        None => Some((name, value)),
        Some(parent) => {
            match parent.children.get_mut(&name) {
                Some(Value::Array(items)) => items.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    parent.children.insert(name, value);
                }
            }
            None
        }
    }
}

fn fault_from(fault: &Value) -> Fault {
    let text = |key: &str| fault.get(key).and_then(Value::as_str).unwrap_or_default().trim().to_string();

    let code = text("faultcode");
    let code = code.rsplit(':').next().unwrap_or_default().to_string();
    let detail = fault.get("detail").filter(|detail| detail.is_object()).cloned();

    Fault { fault_code: code, fault_string: text("faultstring"), detail }
}

fn local_name(qualified: &[u8]) -> String {
    let name = String::from_utf8_lossy(qualified);
    match name.rsplit_once(':') {
        Some((_, local)) => local.to_string(),
        None => name.into_owned(),
    }
}
