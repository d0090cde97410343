//! Building photo pipeline: each record's image is requested from the
//! asset server once at startup, then converted into an egui texture when
//! it finishes loading. Cards look textures up by the relative path the
//! record carries; a path that never loads keeps its placeholder.

use std::collections::HashMap;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use directory::dataset::BuildingDirectory;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// Card art bookkeeping. Keeping the `TextureHandle` keeps the egui
/// texture alive.
#[derive(Resource, Default)]
pub struct BuildingArt {
    pending: Vec<(String, Handle<Image>)>,
    ready: HashMap<String, egui::TextureHandle>,
}

impl BuildingArt {
    pub fn texture_for(&self, image_path: &str) -> Option<egui::TextureId> {
        self.ready.get(image_path).map(|texture| texture.id())
    }
}

// ---------------------------------------------------------------------------
// Systems
// ---------------------------------------------------------------------------

pub fn queue_building_art(
    dir: Res<BuildingDirectory>,
    asset_server: Res<AssetServer>,
    mut art: ResMut<BuildingArt>,
) {
    for building in &dir.buildings {
        let handle = asset_server.load(building.image.clone());
        art.pending.push((building.image.clone(), handle));
    }
}

pub fn promote_loaded_art(
    images: Res<Assets<Image>>,
    mut art: ResMut<BuildingArt>,
    mut contexts: EguiContexts,
) {
    if art.pending.is_empty() {
        return;
    }
    let pending = std::mem::take(&mut art.pending);
    for (path, handle) in pending {
        match images.get(&handle) {
            Some(image) => {
                // Undecodable pixel data just keeps the placeholder.
                if let Some(texture) = card_texture(contexts.ctx_mut(), &path, image) {
                    art.ready.insert(path, texture);
                }
            }
            None => art.pending.push((path, handle)),
        }
    }
}

/// Convert a loaded RGBA8 image into an egui texture.
fn card_texture(
    ctx: &egui::Context,
    name: &str,
    image: &Image,
) -> Option<egui::TextureHandle> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    if image.data.len() != width * height * 4 {
        return None;
    }

    let pixels = image
        .data
        .chunks_exact(4)
        .map(|px| egui::Color32::from_rgba_unmultiplied(px[0], px[1], px[2], px[3]))
        .collect();
    let color_image = egui::ColorImage {
        size: [width, height],
        pixels,
    };

    Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_art_has_no_textures() {
        let art = BuildingArt::default();
        assert!(art.texture_for("buildings/agsm.png").is_none());
    }
}
