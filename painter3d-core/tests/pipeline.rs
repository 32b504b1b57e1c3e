use std::fs;
use std::path::PathBuf;

use painter3d_core::{Color, DrawCommand, DrawList, MeshError, Scene};

const CHECKER_SQUARES: usize = 25 * 19;

fn write_obj(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("painter3d-{}-{name}.obj", std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

fn fills(list: &DrawList) -> Vec<(Vec<(i32, i32)>, Color)> {
    list.commands()[CHECKER_SQUARES + 1..]
        .iter()
        .map(|command| match command {
            DrawCommand::FillPolygon { points, color } => (points.clone(), *color),
            other => panic!("unexpected model command {other:?}"),
        })
        .collect()
}

/// Two parallel triangles, the near one listed first.
const TWO_LAYERS: &str = "\
# near layer
v 0 0 -5
v 1 0 -5
v 0 1 -5
# far layer
v 0 0 5
v 1 0 5
v 0 1 5
f 1 2 3
f 4/1 5/1 6/1
";

#[test]
fn filled_frame_draws_far_facets_first() {
    let path = write_obj("layers", TWO_LAYERS);
    let mut scene = Scene::default();
    scene.load_mesh(&path).unwrap();
    scene.toggle_filled();

    let mut list = DrawList::new();
    scene.render_frame(&mut list, 60);
    let fills = fills(&list);

    // far layer: camera-space z = 15, 512 / 15 = 34.1
    // near layer: camera-space z = 5, 512 / 5 = 102.4
    assert_eq!(
        fills.iter().map(|(points, _)| points.clone()).collect::<Vec<_>>(),
        vec![
            vec![(400, 300), (434, 300), (400, 334)],
            vec![(400, 300), (502, 300), (400, 402)],
        ]
    );

    // both facets share a normal, so they share a shade
    assert_eq!(fills[0].1, fills[1].1);
    fs::remove_file(path).ok();
}

#[test]
fn broken_file_leaves_previous_mesh() {
    let good = write_obj("good", TWO_LAYERS);
    let bad = write_obj("bad", "v 0 0 0\nv 1 0 0\nv 0 1 zero\nf 1 2 3\n");

    let mut scene = Scene::default();
    scene.load_mesh(&good).unwrap();
    let before = scene.mesh();

    match scene.load_mesh(&bad) {
        Err(MeshError::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a parse error, got {other:?}"),
    }
    assert_eq!(*scene.mesh(), *before);

    assert!(matches!(
        scene.load_mesh("/missing/mesh.obj"),
        Err(MeshError::MissingResource { .. })
    ));
    assert_eq!(*scene.mesh(), *before);

    fs::remove_file(good).ok();
    fs::remove_file(bad).ok();
}

#[test]
fn wireframe_frame_outlines_each_facet() {
    let mut scene = Scene::default();
    let mut list = DrawList::new();
    scene.render_frame(&mut list, 0);

    let outlines: Vec<_> = list.commands()[CHECKER_SQUARES + 1..]
        .iter()
        .filter(|c| matches!(c, DrawCommand::OutlinePolygon { points, .. } if points.len() == 3))
        .collect();
    assert_eq!(outlines.len(), scene.mesh().facets().len());
}
