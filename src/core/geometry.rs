use crate::core::room::{Opening, OpeningKind, RoomDimensions};
use serde::Serialize;
use strum_macros::Display;

/// A point in room coordinates, in m: x along the width, y along the depth, z up the height.
pub type Vertex = [f64; 3];

/// Distance from the left edge of the front face at which windows are placed, in m
const WINDOW_OFFSET_X: f64 = 0.1;

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FaceName {
    Front,
    Right,
    Back,
    Left,
    Base,
    Top,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Face {
    pub name: FaceName,
    pub vertices: [Vertex; 4],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OpeningFace {
    pub kind: OpeningKind,
    pub vertices: [Vertex; 4],
}

/// Polygons needed to draw the room as a box with its openings cut into the front face.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoomGeometry {
    pub faces: Vec<Face>,
    pub openings: Vec<OpeningFace>,
    /// width, depth and height relative to the largest of the three
    pub aspect: [f64; 3],
}

pub fn room_geometry(dimensions: &RoomDimensions, openings: &[Opening]) -> RoomGeometry {
    let (width, height, depth) = (dimensions.width(), dimensions.height(), dimensions.depth());

    let corners: [Vertex; 8] = [
        [0., 0., 0.],
        [width, 0., 0.],
        [width, depth, 0.],
        [0., depth, 0.],
        [0., 0., height],
        [width, 0., height],
        [width, depth, height],
        [0., depth, height],
    ];
    let face = |name, [a, b, c, d]: [usize; 4]| Face {
        name,
        vertices: [corners[a], corners[b], corners[c], corners[d]],
    };

    let faces = vec![
        face(FaceName::Front, [0, 1, 5, 4]),
        face(FaceName::Right, [1, 2, 6, 5]),
        face(FaceName::Back, [2, 3, 7, 6]),
        face(FaceName::Left, [3, 0, 4, 7]),
        face(FaceName::Base, [0, 1, 2, 3]),
        face(FaceName::Top, [4, 5, 6, 7]),
    ];

    let openings = openings
        .iter()
        .map(|opening| {
            // windows sit at mid height near the left edge, doors on the floor at mid width
            let (x, z) = match opening.kind() {
                OpeningKind::Window => (WINDOW_OFFSET_X, height / 2.),
                OpeningKind::Door => (width / 2., 0.),
            };
            let (x_end, z_end) = (x + opening.width(), z + opening.height());
            OpeningFace {
                kind: opening.kind(),
                vertices: [[x, 0., z], [x, 0., z_end], [x_end, 0., z_end], [x_end, 0., z]],
            }
        })
        .collect();

    let max_dimension = width.max(height).max(depth);

    RoomGeometry {
        faces,
        openings,
        aspect: [
            width / max_dimension,
            depth / max_dimension,
            height / max_dimension,
        ],
    }
}
