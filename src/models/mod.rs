pub mod axis;
pub mod coordinate;
pub mod pair;
pub mod token;

pub use axis::{Axis, Format};
pub use coordinate::{Coordinate, CoordinateValue, FieldSet};
pub use pair::{CoordinatePair, LatLong};
pub use token::Token;
