/// Point in frame-local 3-D coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn default() -> Self {
        Point3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
    pub fn new(_x: f32, _y: f32, _z: f32) -> Self {
        Point3 {
            x: _x,
            y: _y,
            z: _z,
        }
    }
}

pub fn euclidean_distance(p1: &Point3, p2: &Point3) -> f32 {
    let delt_x = p1.x - p2.x;
    let delt_y = p1.y - p2.y;
    let delt_z = p1.z - p2.z;
    f32::sqrt(delt_x * delt_x + delt_y * delt_y + delt_z * delt_z)
}
