pub mod drive;
pub mod select;
