mod viewer;
pub use viewer::Viewer;

mod about;
pub use about::About;
