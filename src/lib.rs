pub mod animation;
pub mod configuration;
pub mod controller;
pub mod domain;
pub mod error;
pub mod form_submitter;
pub mod post_scaffold;
pub mod share_templates;
pub mod telemetry;
pub mod ui;
