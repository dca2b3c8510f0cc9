//! Domain types for the stop finder.
//!
//! These are request-scoped values that enforce their invariants at
//! construction time, so the resolvers can trust what they receive.

mod coordinates;
mod place;
mod stop;

pub use coordinates::{Coordinates, InvalidCoordinates};
pub use place::{InvalidPlace, PlaceQuery};
pub use stop::{StopInfo, WheelchairBoarding};
