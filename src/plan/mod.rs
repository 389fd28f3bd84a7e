pub mod path;
pub mod stagger;
