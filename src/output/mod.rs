//! Terminal output formatting
//!
//! Letter tiles drawn with crossterm commands, and colored status messages.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_default_answers_notice, print_loss, print_rejection, print_win,
};
pub use formatters::{
    TILE_WIDTH, TileStyle, erase_previous_line, queue_tile, redraw_typing_line,
    render_feedback_row, render_word, wrapped_rows,
};
