pub mod eyes;
pub mod grid;

pub use eyes::{EyeRegion, FinderEyes, NoEyes};
pub use grid::{GridError, ModuleGrid};
