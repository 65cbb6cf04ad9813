use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::anchor::{TrackingEvent, TrackingEventKind};
use crate::engine::assets::pose::WorldPose;
use crate::engine::camera::CameraPoseEvent;
use crate::tools::debug_log::DebugLog;
use crate::tools::disclosure::{Disclosure, DisclosureEvent};
use constants::tracking::{WAYSPOT_FOUND_METHOD, WAYSPOT_LOST_METHOD, WAYSPOT_UPDATED_METHOD};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure. Requests without an id are notifications.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<serde_json::Value>,
    pub error: Option<RpcError>,
    pub id: Option<serde_json::Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: serde_json::Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

/// Resource managing bidirectional RPC communication with the host page.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the host page without expecting response.
    pub fn send_notification(&mut self, method: &str, params: serde_json::Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    /// Queue response for transmission to the host page.
    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }
}

/// Plugin establishing the postMessage bridge to the AR host page.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_event::<CameraPoseEvent>()
            .add_systems(PreUpdate, (process_incoming_messages, handle_rpc_messages).chain())
            .add_systems(Last, send_outgoing_messages);

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    // Thread-safe message queue for cross-thread communication.
    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    if let Some(window) = window() {
        if let Err(e) =
            window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
        {
            error!("Failed to register message listener: {:?}", e);
        }
    }

    // Prevent closure from being dropped by transferring ownership to JS.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

/// Resource wrapping thread-safe message queue for WASM event handling.
#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Event representing an incoming RPC message from the host page.
#[derive(Event)]
pub struct IncomingRpcMessage {
    pub content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

/// Typed result of routing one request.
#[derive(Debug, Clone, PartialEq)]
pub enum RpcCommand {
    Tracking(TrackingEvent),
    CameraPose(CameraPoseEvent),
    Disclosure(DisclosureEvent),
    GetDisclosureState,
    ToggleDebugLog,
}

/// Map a request onto an engine command, validating params.
pub fn parse_command(request: &RpcRequest) -> Result<RpcCommand, RpcError> {
    if request.jsonrpc != "2.0" {
        return Err(RpcError::invalid_request("Expected jsonrpc \"2.0\""));
    }

    let method = request.method.as_str();
    let command = match method {
        WAYSPOT_FOUND_METHOD => {
            RpcCommand::Tracking(parse_tracking(TrackingEventKind::Found, &request.params)?)
        }
        WAYSPOT_UPDATED_METHOD => {
            RpcCommand::Tracking(parse_tracking(TrackingEventKind::Updated, &request.params)?)
        }
        WAYSPOT_LOST_METHOD => {
            RpcCommand::Tracking(parse_tracking(TrackingEventKind::Lost, &request.params)?)
        }
        "camera_pose" => {
            let pose = parse_params::<PoseParams>(&request.params, "Expected 'position' and 'rotation'")?;
            let pose = pose.to_world_pose()?;
            RpcCommand::CameraPose(CameraPoseEvent {
                position: pose.position,
                rotation: pose.rotation,
            })
        }
        "tap_caption" => RpcCommand::Disclosure(DisclosureEvent::TapCaption),
        "tap_detail" => RpcCommand::Disclosure(DisclosureEvent::TapDetail),
        "get_disclosure_state" => RpcCommand::GetDisclosureState,
        "toggle_debug_log" => RpcCommand::ToggleDebugLog,
        _ => {
            return Err(RpcError::method_not_found(method));
        }
    };
    Ok(command)
}

#[derive(Deserialize)]
struct Vec3Params {
    x: f32,
    y: f32,
    z: f32,
}

#[derive(Deserialize)]
struct QuatParams {
    x: f32,
    y: f32,
    z: f32,
    w: f32,
}

#[derive(Deserialize)]
struct PoseParams {
    position: Vec3Params,
    rotation: QuatParams,
}

impl PoseParams {
    fn to_world_pose(&self) -> Result<WorldPose, RpcError> {
        let position = Vec3::new(self.position.x, self.position.y, self.position.z);
        let rotation = Quat::from_xyzw(
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.rotation.w,
        );
        if !position.is_finite() || !rotation.is_finite() || rotation.length_squared() == 0.0 {
            return Err(RpcError::invalid_params("Pose contains non-finite or zero rotation"));
        }
        Ok(WorldPose::new(position, rotation.normalize()))
    }
}

#[derive(Deserialize)]
struct TrackingParams {
    name: String,
    #[serde(flatten)]
    pose: PoseParams,
}

fn parse_tracking(
    kind: TrackingEventKind,
    params: &serde_json::Value,
) -> Result<TrackingEvent, RpcError> {
    let params = parse_params::<TrackingParams>(
        params,
        "Expected 'name', 'position' {x,y,z} and 'rotation' {x,y,z,w}",
    )?;
    let pose = params.pose.to_world_pose()?;
    Ok(TrackingEvent::new(kind, params.name, pose))
}

fn parse_params<T: for<'de> Deserialize<'de>>(
    params: &serde_json::Value,
    message: &str,
) -> Result<T, RpcError> {
    serde_json::from_value::<T>(params.clone()).map_err(|_| RpcError::invalid_params(message))
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut tracking_events: EventWriter<TrackingEvent>,
    mut camera_events: EventWriter<CameraPoseEvent>,
    mut disclosure_events: EventWriter<DisclosureEvent>,
    disclosure: Res<Disclosure>,
    mut debug_log: ResMut<DebugLog>,
) {
    for event in events.read() {
        let request = match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => request,
            Err(parse_error) => {
                warn!("Unparseable RPC message: {}", parse_error);
                rpc_interface.send_notification(
                    "debug_message",
                    serde_json::json!({
                        "message": format!("Parse error: {}", parse_error)
                    }),
                );
                continue;
            }
        };

        let result = parse_command(&request).and_then(|command| match command {
            RpcCommand::Tracking(tracking) => {
                tracking_events.write(tracking);
                Ok(serde_json::json!({ "success": true }))
            }
            RpcCommand::CameraPose(pose) => {
                camera_events.write(pose);
                Ok(serde_json::json!({ "success": true }))
            }
            RpcCommand::Disclosure(tap) => {
                disclosure_events.write(tap);
                Ok(serde_json::json!({ "success": true }))
            }
            RpcCommand::GetDisclosureState => serde_json::to_value(disclosure.view())
                .map_err(|e| RpcError::internal_error(&e.to_string())),
            RpcCommand::ToggleDebugLog => Ok(serde_json::json!({ "visible": debug_log.toggle() })),
        });

        // Only requests with ids get a response; notifications only log failures.
        match (request.id, result) {
            (Some(id), Ok(result_value)) => rpc_interface.queue_response(RpcResponse {
                jsonrpc: "2.0".to_string(),
                result: Some(result_value),
                error: None,
                id: Some(id),
            }),
            (Some(id), Err(error)) => {
                rpc_interface.queue_response(create_error_response(id, error))
            }
            (None, Ok(_)) => {}
            (None, Err(error)) => {
                warn!("RPC notification '{}' rejected: {}", request.method, error.message);
            }
        }
    }
}

/// Create standardized error response.
fn create_error_response(id: serde_json::Value, error: RpcError) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(error),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the host page.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    // Send notifications first.
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Send responses second to maintain order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

/// Send serialized message to parent window.
fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No-op for non-WASM targets.
        let _ = message;
    }
}

/// Standard RPC error codes and constructors.
impl RpcError {
    pub fn invalid_request(message: &str) -> Self {
        Self {
            code: -32600,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: -32601,
            message: "Method not found".to_string(),
            data: Some(serde_json::json!({ "method": method })),
        }
    }

    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(method: &str, params: serde_json::Value) -> RpcRequest {
        RpcRequest {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
            id: None,
        }
    }

    fn pose_params(name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "position": {"x": 1.0, "y": 2.0, "z": 3.0},
            "rotation": {"x": 0.0, "y": 0.0, "z": 0.0, "w": 2.0}
        })
    }

    #[test]
    fn parses_tracking_notifications() {
        for (method, kind) in [
            ("wayspot_found", TrackingEventKind::Found),
            ("wayspot_updated", TrackingEventKind::Updated),
            ("wayspot_lost", TrackingEventKind::Lost),
        ] {
            let command = parse_command(&request(method, pose_params("wp1"))).unwrap();
            let RpcCommand::Tracking(event) = command else {
                panic!("expected tracking command for {method}");
            };
            assert_eq!(event.kind, kind);
            assert_eq!(event.wayspot_name, "wp1");
            assert_eq!(event.pose.position, Vec3::new(1.0, 2.0, 3.0));
            assert_eq!(event.pose.rotation, Quat::IDENTITY);
        }
    }

    #[test]
    fn rejects_tracking_without_name() {
        let err = parse_command(&request(
            "wayspot_found",
            json!({"position": {"x": 0, "y": 0, "z": 0}, "rotation": {"x": 0, "y": 0, "z": 0, "w": 1}}),
        ))
        .unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn rejects_zero_rotation() {
        let err = parse_command(&request(
            "camera_pose",
            json!({"position": {"x": 0, "y": 0, "z": 0}, "rotation": {"x": 0, "y": 0, "z": 0, "w": 0}}),
        ))
        .unwrap_err();
        assert_eq!(err.code, -32602);
    }

    #[test]
    fn maps_taps_to_disclosure_events() {
        assert_eq!(
            parse_command(&request("tap_caption", json!(null))),
            Ok(RpcCommand::Disclosure(DisclosureEvent::TapCaption))
        );
        assert_eq!(
            parse_command(&request("tap_detail", json!({}))),
            Ok(RpcCommand::Disclosure(DisclosureEvent::TapDetail))
        );
    }

    #[test]
    fn unknown_method_is_reported() {
        let err = parse_command(&request("launch_rockets", json!({}))).unwrap_err();
        assert_eq!(err.code, -32601);
        assert_eq!(err.data, Some(json!({"method": "launch_rockets"})));
    }

    #[test]
    fn rejects_wrong_protocol_version() {
        let mut req = request("tap_caption", json!(null));
        req.jsonrpc = "1.0".to_string();
        assert_eq!(parse_command(&req).unwrap_err().code, -32600);
    }

    #[test]
    fn request_without_params_deserialises() {
        let request: RpcRequest =
            serde_json::from_str(r#"{"jsonrpc":"2.0","method":"get_disclosure_state","id":4}"#)
                .unwrap();
        assert_eq!(request.id, Some(json!(4)));
        assert_eq!(parse_command(&request), Ok(RpcCommand::GetDisclosureState));
    }
}
