pub mod houses;
pub mod position;
pub mod signs;

pub use houses::{house_in_cusps, house_of};
pub use position::{classify, AstrologicalPosition, Placement};
pub use signs::{zodiac_sign, Element, ZodiacSign};
