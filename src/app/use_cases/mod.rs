//! Use-Cases der Application-Layer-Orchestrierung.

pub mod options;
pub mod scene;
pub mod tool;
pub mod view;
