mod classify_way;

pub use classify_way::{is_area, ClassifyWay, WayFeature};
