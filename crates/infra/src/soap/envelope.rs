//! Request envelope writer
//!
//! The request body is a JSON object tree. Each object field becomes a
//! child element in field order, arrays repeat the element, and null is
//! sent as an explicit `xsi:nil` element. Every element is qualified with
//! the service namespace.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use responsys_domain::constants::{SERVICE_NAMESPACE, SESSION_HEADER};
use serde_json::Value;

use super::{EnvelopeError, SOAP_ENV_NAMESPACE, XSI_NAMESPACE};

const SERVICE_PREFIX: &str = "urn";

/// Build the SOAP request for `operation` with `payload` as its body.
///
/// `session_id` goes into the `SessionHeader` when present.
pub fn build_request(
    operation: &str,
    payload: &Value,
    session_id: Option<&str>,
) -> Result<String, EnvelopeError> {
    let fields = match payload {
        Value::Object(fields) => fields,
        other => return Err(EnvelopeError::NotAnObject(other.to_string())),
    };

    let mut writer = Writer::new(Vec::new());
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut envelope = BytesStart::new("soapenv:Envelope");
    envelope.push_attribute(("xmlns:soapenv", SOAP_ENV_NAMESPACE));
    envelope.push_attribute(("xmlns:urn", SERVICE_NAMESPACE));
    envelope.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    emit(&mut writer, Event::Start(envelope))?;

    emit(&mut writer, Event::Start(BytesStart::new("soapenv:Header")))?;
    if let Some(session_id) = session_id {
        let header = qualified(SESSION_HEADER);
        emit(&mut writer, Event::Start(BytesStart::new(header.as_str())))?;
        write_value(&mut writer, "sessionId", &Value::String(session_id.to_string()))?;
        emit(&mut writer, Event::End(BytesEnd::new(header.as_str())))?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("soapenv:Header")))?;

    emit(&mut writer, Event::Start(BytesStart::new("soapenv:Body")))?;
    let operation_element = qualified(operation);
    emit(&mut writer, Event::Start(BytesStart::new(operation_element.as_str())))?;
    for (name, value) in fields {
        write_value(&mut writer, name, value)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new(operation_element.as_str())))?;
    emit(&mut writer, Event::End(BytesEnd::new("soapenv:Body")))?;

    emit(&mut writer, Event::End(BytesEnd::new("soapenv:Envelope")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| EnvelopeError::Xml(e.to_string()))
}

fn write_value(writer: &mut Writer<Vec<u8>>, name: &str, value: &Value) -> Result<(), EnvelopeError> {
    let element = qualified(name);

    match value {
        Value::Array(items) => {
            for item in items {
                write_value(writer, name, item)?;
            }
        }
        Value::Null => {
            let mut nil = BytesStart::new(element.as_str());
            nil.push_attribute(("xsi:nil", "true"));
            emit(writer, Event::Empty(nil))?;
        }
        Value::Object(fields) => {
            emit(writer, Event::Start(BytesStart::new(element.as_str())))?;
            for (child, child_value) in fields {
                write_value(writer, child, child_value)?;
            }
            emit(writer, Event::End(BytesEnd::new(element.as_str())))?;
        }
        Value::String(text) => write_text(writer, &element, text)?,
        Value::Bool(flag) => write_text(writer, &element, &flag.to_string())?,
        Value::Number(number) => write_text(writer, &element, &number.to_string())?,
    }

    Ok(())
}

fn write_text(writer: &mut Writer<Vec<u8>>, element: &str, text: &str) -> Result<(), EnvelopeError> {
    emit(writer, Event::Start(BytesStart::new(element)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(element)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), EnvelopeError> {
    writer.write_event(event).map_err(|e| EnvelopeError::Xml(e.to_string()))
}

fn qualified(name: &str) -> String {
    format!("{SERVICE_PREFIX}:{name}")
}
