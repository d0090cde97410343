use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use directory::dataset::BuildingDirectory;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Freerooms".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((directory::DirectoryPlugin, ui::UiPlugin));

    // Directory injection: point FREEROOMS_DIRECTORY at a JSON array of
    // building records to browse it instead of the bundled campus.
    if let Ok(path) = std::env::var("FREEROOMS_DIRECTORY") {
        match std::fs::read_to_string(&path) {
            Ok(json) => match BuildingDirectory::from_json_str(&json) {
                Ok(dir) => {
                    info!("loaded {} buildings from {}", dir.buildings.len(), path);
                    app.insert_resource(dir);
                }
                Err(err) => {
                    warn!("ignoring directory at {}: {}", path, err);
                }
            },
            Err(err) => {
                warn!("could not read directory at {}: {}", path, err);
            }
        }
    }

    app.run();
}
