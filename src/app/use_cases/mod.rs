//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod curb;
pub mod dataset;
pub mod editor;
pub mod export;
pub mod selection;
