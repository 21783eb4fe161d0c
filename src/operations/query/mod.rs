mod contains;

pub use contains::ContainsPoint;
