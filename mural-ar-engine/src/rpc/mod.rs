//! JSON-RPC 2.0 bridge to the AR host page.
//!
//! The engine runs inside an iframe; the host page owns the camera feed and
//! the wayspot tracker and forwards their output over `postMessage`.
//!
//! ```text
//! Host page (tracker, camera)  <──postMessage──>  Engine (iframe)
//!        │                                           │
//!        ├─ wayspot_found / _updated / _lost ──────> │ TrackingEvent
//!        ├─ camera_pose ───────────────────────────> │ CameraPoseEvent
//!        ├─ tap_caption / tap_detail ──────────────> │ DisclosureEvent
//!        ├─ get_disclosure_state (request) ────────> │
//!        │ <──────────────────────────── response ───┤
//!        │ <── selection_changed / disclosure_changed┤
//! ```
//!
//! ## Tracking notifications
//!
//! `params`: `{ "name": string, "position": {x,y,z}, "rotation": {x,y,z,w} }`.
//! Rotations are normalised; zero or non-finite values are rejected with
//! `-32602`.
//!
//! ## Error Handling
//!
//! Standard JSON-RPC 2.0 error codes:
//! - `-32600`: Invalid request (wrong `jsonrpc` version)
//! - `-32601`: Method not found
//! - `-32602`: Invalid params
//! - `-32603`: Internal error
//!
//! Notifications (no `id`) never get responses; failures are logged instead.
//! Incoming messages are drained in `PreUpdate`, so tracking events land
//! before the anchor systems run in `Update`.

/// Message queue, request routing and outgoing notification transport.
pub mod web_rpc;
