//! Helper functions shared by the renderers

pub mod xml;
