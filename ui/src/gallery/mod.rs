mod grid;
pub use grid::GalleryGrid;

mod detail;
pub use detail::DetailView;

mod level;
pub use level::LevelPanel;

pub(crate) mod labels;

mod observe;
