//! Descriptor Generator Implementations

mod gradle;

pub use gradle::{
    render_descriptor, render_settings, GradleDescriptorWriter, DESCRIPTOR_FILE, SETTINGS_FILE,
};
