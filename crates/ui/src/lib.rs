use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod browser;
pub mod building_art;
pub mod header;
pub mod theme;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<building_art::BuildingArt>()
            .add_systems(
                Startup,
                (theme::apply_freerooms_theme, building_art::queue_building_art),
            )
            .add_systems(
                Update,
                (
                    building_art::promote_loaded_art,
                    header::header_ui,
                    browser::browser_ui,
                )
                    .chain(),
            );
    }
}
