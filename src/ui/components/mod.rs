//! Reusable UI components

// Swipeable controls
pub mod book_cover_component;
pub mod quote_card_component;
pub mod swipe_control;

// Component architecture
pub mod carousel_component;
pub mod dialog_component;
pub mod loading_component;
pub mod quote_list_component;
pub mod scrollbar_helper;

// Component exports
pub use book_cover_component::BookCoverComponent;
pub use carousel_component::CarouselComponent;
pub use dialog_component::DialogComponent;
pub use loading_component::LoadingComponent;
pub use quote_card_component::QuoteCardComponent;
pub use quote_list_component::QuoteListComponent;
pub use swipe_control::ControlPhase;
