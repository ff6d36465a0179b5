use crate::r#match::MovementIntent;
use nalgebra::Vector3;

/// Anything whose position and velocity can be observed.
pub trait PositionQueryable {
    fn position(&self) -> Vector3<f32>;
    fn velocity(&self) -> Vector3<f32>;
}

/// A body that accepts additive kick impulses.
pub trait Kickable: PositionQueryable {
    /// Returns false when the kick was rejected as malformed.
    fn kick(&mut self, direction: Vector3<f32>, power: f32) -> bool;
}

/// An agent body steered by movement intents.
pub trait Movable: PositionQueryable {
    /// Returns false when the intent carries non-finite vectors.
    fn set_intent(&mut self, intent: MovementIntent) -> bool;
    fn max_speed(&self) -> f32;
    fn control_radius(&self) -> f32;
}
