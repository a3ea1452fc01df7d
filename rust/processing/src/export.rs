// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Top-level export pipeline
//!
//! Floors are the direct frame children of the scene root. Having no
//! floor frames at all is the one precondition that surfaces as an
//! error; a scene whose floors all contribute nothing exports an empty
//! list, which callers should treat as a valid (if uninteresting)
//! outcome rather than a failure.

use floorgeo_core::{NodeId, Scene, TemplateLibrary};

use crate::assembler::{FloorAssembler, FloorExport};
use crate::error::{Error, Result};

/// Export every floor of the scene as marker and shape collections
pub fn export_floors(scene: &Scene, library: &dyn TemplateLibrary) -> Result<Vec<FloorExport>> {
    let root = scene.root();
    let floors: Vec<NodeId> = scene
        .children(root)
        .filter(|n| n.kind.is_frame())
        .map(|n| n.id)
        .collect();

    if floors.is_empty() {
        return Err(Error::NoFloors);
    }

    tracing::info!(
        root = %scene.node(root).name,
        floor_count = floors.len(),
        "Starting floor export"
    );

    let assembler = FloorAssembler::new(scene, library);
    let exports: Vec<FloorExport> = floors
        .into_iter()
        .filter_map(|floor| assembler.assemble(floor))
        .collect();

    tracing::info!(exported = exports.len(), "Floor export complete");
    Ok(exports)
}

/// Serialize an export result as compact JSON
pub fn to_json(floors: &[FloorExport]) -> Result<String> {
    Ok(serde_json::to_string(floors)?)
}

/// Serialize an export result as indented JSON for human consumers
pub fn to_json_pretty(floors: &[FloorExport]) -> Result<String> {
    Ok(serde_json::to_string_pretty(floors)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorgeo_core::{NodeKind, StaticTemplateLibrary};

    #[test]
    fn test_no_floor_frames_is_an_error() {
        let mut builder = Scene::builder("Building", 100.0, 100.0);
        let root = builder.root();
        builder.add_child(root, "loose-note", NodeKind::Other, 0.0, 0.0, 10.0, 10.0);
        let scene = builder.finish();

        let library = StaticTemplateLibrary::new();
        match export_floors(&scene, &library) {
            Err(Error::NoFloors) => {}
            other => panic!("expected NoFloors, got {:?}", other),
        }
    }

    #[test]
    fn test_all_floors_empty_is_a_valid_empty_result() {
        let mut builder = Scene::builder("Building", 100.0, 100.0);
        let root = builder.root();
        builder.add_child(root, "1F", NodeKind::Frame, 0.0, 0.0, 100.0, 50.0);
        builder.add_child(root, "2F", NodeKind::Frame, 0.0, 50.0, 100.0, 50.0);
        let scene = builder.finish();

        let library = StaticTemplateLibrary::new();
        let exports = export_floors(&scene, &library).unwrap();
        assert!(exports.is_empty());
    }
}
