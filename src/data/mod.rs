pub mod axes;
pub mod collection;
pub mod colormap;
pub mod figure;
pub mod norm;
pub mod segments;
pub mod values;
