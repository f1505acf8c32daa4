pub mod carousel;
pub mod cursor;
pub mod motion;
pub mod particles;
