// Library root
// -----------
// The binary (`main.rs`) wires these modules together; everything the
// tool does lives behind this small library surface so the loaders and
// the push loop can be tested without a terminal or a network.
//
// Module responsibilities:
// - `config`: process-wide settings, read once from the environment.
// - `templates`: template directory listing, slug derivation, file reads.
// - `metadata`: the headerless CSV of per-slug subject/from/labels.
// - `payload`: assembly of the per-template update request body.
// - `api`: the blocking HTTP client for the update endpoint.
// - `ui`: welcome banner and the confirmation gate.
// - `push`: the sequential push loop and the run coordinator.
pub mod api;
pub mod config;
pub mod metadata;
pub mod payload;
pub mod push;
pub mod templates;
pub mod ui;
