pub mod columns;
pub mod navigation;
pub mod sorting;

pub use columns::Column;
pub use navigation::{
    focused_column, navigate, Direction, Edge, FocusMove, FocusSurface, FocusTarget,
};
pub use sorting::{apply_sort, sort, SortState};
