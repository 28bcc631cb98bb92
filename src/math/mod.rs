/// Integer plane point. Coordinates are exact; no tolerance applies at this layer.
pub type Point2 = nalgebra::Point2<i64>;
