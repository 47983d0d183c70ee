use crate::StrError;
use serde::{Deserialize, Serialize};

/// Defines the id of the toe point of the slope face
pub const TOE_POINT_ID: usize = 1;

/// Defines the id of the crest point of the slope face
pub const CREST_POINT_ID: usize = 2;

/// Defines the x-coordinate of the left model boundary (ft)
pub const LEFT_BOUNDARY_X: f64 = -100.0;

/// Defines the plateau length behind the crest (ft)
pub const PLATEAU_LENGTH: f64 = 180.0;

/// Defines the elevation of the bottom model boundary (ft)
pub const BOTTOM_ELEVATION: f64 = -100.0;

/// Defines the elevations of the layer-boundary points (ft)
pub const LAYER_BOUNDARY_ELEVATIONS: [f64; 4] = [-20.0, -40.0, -60.0, -80.0];

/// Defines the name of the region above the toe elevation
pub const SLOPE_MATERIAL: &str = "Slope Material";

/// Defines the name of the region below the toe elevation
pub const FOUNDATION_MATERIAL: &str = "Foundation Material";

/// Holds a point of the slope model
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GeometryPoint {
    /// Identification number (1-based)
    pub id: usize,

    /// Horizontal coordinate (ft)
    pub x: f64,

    /// Vertical coordinate (ft)
    pub y: f64,

    /// Indicates that the point is fixed in position
    pub pinned: bool,
}

/// Holds a named material region defined by a closed polygon of point ids
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Region {
    /// Material name
    pub name: String,

    /// Point ids in polygon order
    pub point_ids: Vec<usize>,
}

/// Holds the multi-point slope geometry with named regions
///
/// The model is a 15-point template: the toe at the origin, the crest at `(run, H)`, a 180 ft plateau,
/// the left boundary at x = -100 ft, the bottom at y = -100 ft, and pairs of layer-boundary points at
/// -20, -40, -60, and -80 ft. Point 7 (right boundary at the toe elevation) is the only unpinned point.
///
/// ```text
///              2 ────────────── 3
///             /                 │
///  4 ──────  1 ──────────────── 7
///  8                            9
/// 10                           11
/// 12                           13
/// 14                           15
///  5 ────────────────────────── 6
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SlopeGeometry {
    /// All points
    ///
    /// **(readonly)**
    pub points: Vec<GeometryPoint>,

    /// The "Slope Material" and "Foundation Material" regions
    ///
    /// **(readonly)**
    pub regions: Vec<Region>,
}

impl SlopeGeometry {
    /// Allocates a new instance from the slope angle (degrees) and height (ft)
    ///
    /// Requires `0 < slope_angle < 90` and `slope_height > 0`.
    pub fn new(slope_angle: f64, slope_height: f64) -> Result<Self, StrError> {
        if !(slope_angle > 0.0 && slope_angle < 90.0) {
            return Err("slope_angle must satisfy 0 < angle < 90");
        }
        if !(slope_height > 0.0) || !slope_height.is_finite() {
            return Err("slope_height must be > 0");
        }
        let h = slope_height;
        let run = h / f64::tan(slope_angle.to_radians());
        let xr = run + PLATEAU_LENGTH;
        let xl = LEFT_BOUNDARY_X;
        let yb = BOTTOM_ELEVATION;
        let mut points = vec![
            GeometryPoint { id: 1, x: 0.0, y: 0.0, pinned: true },
            GeometryPoint { id: 2, x: run, y: h, pinned: true },
            GeometryPoint { id: 3, x: xr, y: h, pinned: true },
            GeometryPoint { id: 4, x: xl, y: 0.0, pinned: true },
            GeometryPoint { id: 5, x: xl, y: yb, pinned: true },
            GeometryPoint { id: 6, x: xr, y: yb, pinned: true },
            GeometryPoint { id: 7, x: xr, y: 0.0, pinned: false },
        ];
        for (i, y) in LAYER_BOUNDARY_ELEVATIONS.iter().enumerate() {
            let id = 8 + 2 * i;
            points.push(GeometryPoint { id, x: xl, y: *y, pinned: true });
            points.push(GeometryPoint { id: id + 1, x: xr, y: *y, pinned: true });
        }
        let regions = vec![
            Region {
                name: SLOPE_MATERIAL.to_string(),
                point_ids: vec![1, 2, 3, 7],
            },
            Region {
                name: FOUNDATION_MATERIAL.to_string(),
                point_ids: vec![4, 1, 7, 9, 11, 13, 15, 6, 5, 14, 12, 10, 8],
            },
        ];
        Ok(SlopeGeometry { points, regions })
    }

    /// Returns the point with a given id
    pub fn point(&self, id: usize) -> Result<&GeometryPoint, StrError> {
        self.points.iter().find(|p| p.id == id).ok_or("cannot find point with the given id")
    }

    /// Returns the region with a given name
    pub fn region(&self, name: &str) -> Result<&Region, StrError> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or("cannot find region with the given name")
    }

    /// Returns the (dx, dy) vector from the toe to the crest
    fn face(&self) -> Result<(f64, f64), StrError> {
        let toe = self.point(TOE_POINT_ID)?;
        let crest = self.point(CREST_POINT_ID)?;
        Ok((crest.x - toe.x, crest.y - toe.y))
    }

    /// Returns the slope angle (degrees) computed from the toe and crest points
    pub fn slope_angle(&self) -> Result<f64, StrError> {
        let (dx, dy) = self.face()?;
        if dx == 0.0 {
            return Ok(90.0);
        }
        Ok(f64::atan(dy / dx).to_degrees())
    }

    /// Returns the slope height (ft) computed from the toe and crest points
    pub fn slope_height(&self) -> Result<f64, StrError> {
        let (_, dy) = self.face()?;
        Ok(dy)
    }

    /// Returns the horizontal run (ft) of the slope face
    pub fn horizontal_run(&self) -> Result<f64, StrError> {
        let (dx, _) = self.face()?;
        Ok(dx)
    }

    /// Returns the length (ft) of the slope face
    pub fn slope_length(&self) -> Result<f64, StrError> {
        let (dx, dy) = self.face()?;
        Ok(f64::sqrt(dx * dx + dy * dy))
    }

    /// Calculates the area (ft²) of a region using the shoelace formula
    pub fn region_area(&self, name: &str) -> Result<f64, StrError> {
        let region = self.region(name)?;
        let n = region.point_ids.len();
        if n < 3 {
            return Err("region must have at least 3 points");
        }
        let mut twice_area = 0.0;
        for i in 0..n {
            let a = self.point(region.point_ids[i])?;
            let b = self.point(region.point_ids[(i + 1) % n])?;
            twice_area += a.x * b.y - b.x * a.y;
        }
        Ok(f64::abs(twice_area) / 2.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
