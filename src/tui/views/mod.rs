//! Dashboard views.

mod cards;
mod related;
mod slide_over;

pub use cards::render_cards;
pub use related::render_related_panel;
pub use slide_over::render_slide_over;
