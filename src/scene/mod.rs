mod common;

// Individual layer modules
mod band;
mod composer;
mod palm;
mod sky;
mod sun;

use common::Layer;
pub(crate) use composer::SceneComposer;

use crate::config::SceneConfig;

/// Build the layers of the scene, ordered from back to front
pub(crate) fn layers(config: &SceneConfig) -> Vec<Box<dyn Layer>> {
    let mut layers: Vec<Box<dyn Layer>> = vec![
        Box::new(sky::Sky { dawn: config.sunrise_colors[0], day: config.sunrise_colors[1] }),
        // The sun goes before water and sand so it sets behind them
        Box::new(sun::Sun { shape: config.sun.clone(), color: config.sun_color }),
        Box::new(band::Band { rows: config.water.clone(), color: config.water_color }),
        Box::new(band::Band { rows: config.sand.clone(), color: config.sand_color }),
    ];
    for shape in &config.palms {
        layers.push(Box::new(palm::Palm {
            shape: shape.clone(),
            trunk_color: config.trunk_color,
            leaf_color: config.palm_color,
        }));
    }
    layers
}
