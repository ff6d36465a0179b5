pub mod chase_ball;
pub mod defend;
pub mod dribble;
pub mod idle;
pub mod returning;
pub mod shoot;

pub use chase_ball::*;
pub use defend::*;
pub use dribble::*;
pub use idle::*;
pub use returning::*;
pub use shoot::*;

use nalgebra::Vector3;

/// Rotates a direction around the vertical axis by `angle` radians.
pub fn rotate_horizontal(direction: Vector3<f32>, angle: f32) -> Vector3<f32> {
    let (sin, cos) = angle.sin_cos();

    Vector3::new(
        direction.x * cos - direction.z * sin,
        direction.y,
        direction.x * sin + direction.z * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_horizontal_keeps_length_and_height() {
        let direction = Vector3::new(1.0, 0.2, 0.0);
        let rotated = rotate_horizontal(direction, 0.3);

        assert!((rotated.norm() - direction.norm()).abs() < 1e-6);
        assert_eq!(rotated.y, 0.2);
        assert!((rotated.z.atan2(rotated.x) - 0.3).abs() < 1e-6);
    }
}
