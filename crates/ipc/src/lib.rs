//! IPC message protocol for hexarea
//!
//! Defines all message types exchanged between a UI collaborator and the
//! hexagon grid core. Messages are JSON with adjacent tagging
//! (`{"type": ..., "data": ...}`).

pub mod commands;
pub mod error;
pub mod input;
pub mod messages;
pub mod types;

pub use commands::*;
pub use error::IpcError;
pub use input::*;
pub use messages::*;
pub use types::*;

/// Serialize a message to a JSON string.
pub fn to_json<T: serde::Serialize>(msg: &T) -> Result<String, IpcError> {
    Ok(serde_json::to_string(msg)?)
}

/// Parse a single message from a JSON string.
pub fn from_json<T: serde::de::DeserializeOwned>(json: &str) -> Result<T, IpcError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(IpcError::InvalidFormat("empty message".to_string()));
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Parse a script: a JSON array of UI messages.
pub fn parse_script(json: &str) -> Result<Vec<UiToCore>, IpcError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if !value.is_array() {
        return Err(IpcError::InvalidFormat(
            "script must be a JSON array of messages".to_string(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_message_shape() {
        let msg = UiToCore::Pointer(PointerEvent::Down { x: 10.0, y: 20.0 });
        let json = to_json(&msg).unwrap();
        let expected = r#"{"type":"Pointer","data":{"Down":{"x":10.0,"y":20.0}}}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn test_parse_layer_create_without_optional_fields() {
        let msg: UiToCore =
            from_json(r#"{"type":"Layer","data":{"Create":{}}}"#).unwrap();
        match msg {
            UiToCore::Layer(LayerCommand::Create { name, color }) => {
                assert!(name.is_none());
                assert!(color.is_none());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_unit_variants() {
        let msg: UiToCore = from_json(r#"{"type":"ComputeAreas"}"#).unwrap();
        assert!(matches!(msg, UiToCore::ComputeAreas));

        let msg: UiToCore = from_json(r#"{"type":"Pointer","data":"Up"}"#).unwrap();
        assert!(matches!(msg, UiToCore::Pointer(PointerEvent::Up)));
    }

    #[test]
    fn test_parse_script() {
        let script = r#"[
            {"type":"Grid","data":{"SetHexSize":{"size":25.0}}},
            {"type":"Pointer","data":{"Down":{"x":1.0,"y":2.0}}},
            {"type":"Pointer","data":"Leave"},
            {"type":"ComputeAreas"}
        ]"#;
        let messages = parse_script(script).unwrap();
        assert_eq!(messages.len(), 4);
        assert!(matches!(
            messages[0],
            UiToCore::Grid(GridCommand::SetHexSize { size }) if size == 25.0
        ));
    }

    #[test]
    fn test_parse_script_rejects_object() {
        let err = parse_script(r#"{"type":"ComputeAreas"}"#).unwrap_err();
        assert!(matches!(err, IpcError::InvalidFormat(_)));
    }

    #[test]
    fn test_empty_message_is_invalid() {
        let err = from_json::<UiToCore>("   ").unwrap_err();
        assert!(matches!(err, IpcError::InvalidFormat(_)));
    }

    #[test]
    fn test_area_report_serializes() {
        let msg = CoreToUi::AreasComputed(AreaReport {
            total_cells: 4,
            layers: vec![LayerAreaInfo {
                id: 1,
                name: "Layer 1".to_string(),
                color: "#FF5252".to_string(),
                count: 3,
                percentage: "75.00".to_string(),
            }],
        });
        let json = to_json(&msg).unwrap();
        let head = r#"{"type":"AreasComputed","data":{"total_cells":4"#;
        assert!(json.starts_with(head));
        assert!(json.contains(r#""percentage":"75.00""#));
    }
}
