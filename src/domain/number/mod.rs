//! Numbers resource - stored integers and their adjacent-pair sums.

mod errors;
mod number;
mod pairing;

pub use errors::NumberError;
pub use number::{NewNumber, Number, NumberPair};
pub use pairing::adjacent_pairs;
