pub mod card_body;
pub mod card_display;
pub mod search_overlay;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use card_body::{CardBody, CardBodyProps};
pub use card_display::{CardDisplay, CardDisplayProps, ERROR_ICON};
pub use search_overlay::{SearchOverlay, SearchOverlayProps};
