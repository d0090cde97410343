use bevy::prelude::*;

pub mod building;
pub mod controls;
pub mod dataset;
pub mod status;

pub struct DirectoryPlugin;

impl Plugin for DirectoryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<dataset::BuildingDirectory>()
            .init_resource::<controls::BrowserCapabilities>()
            .init_resource::<controls::BrowserControls>();
    }
}
