// Shared 2D vector alias so the model and its hosts agree on one type.
pub use bevy_math::Vec2 as Vec2f;
