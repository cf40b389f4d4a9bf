// src/services/mod.rs
pub mod accessibility;
pub mod auto_layout;
pub mod color_space;
pub mod design_advisor;
pub mod harmony;
pub mod layout_metrics;
pub mod palette;
pub mod typography;

pub use accessibility::{classify, contrast_ratio, relative_luminance};
pub use design_advisor::DesignAdvisor;
