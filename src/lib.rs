//! Recovers the logical pixel grid of upscaled pixel art.
//!
//! Pixel art is usually shared enlarged, with every logical pixel drawn as a
//! `block_size x block_size` square so it survives viewers that would
//! otherwise blur it. [`reduce`] walks those squares and keeps one color per
//! square, chosen by a [`BlockColorStrategy`].

// Performance
#![warn(clippy::inefficient_to_string)]
#![warn(clippy::large_types_passed_by_value)]
#![deny(clippy::linkedlist)]
#![allow(clippy::manual_div_ceil)]
#![warn(clippy::needless_collect)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::or_fun_call)]
#![warn(clippy::redundant_clone)]
#![warn(clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::unnecessary_box_returns)]
// Readability/Code Intention
#![warn(clippy::checked_conversions)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::enum_glob_use)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::implicit_clone)]
#![warn(clippy::inconsistent_struct_constructor)]
#![warn(clippy::manual_assert)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::match_bool)]
#![warn(clippy::mod_module_files)]
#![warn(clippy::needless_continue)]
#![warn(clippy::option_if_let_else)]
#![warn(clippy::range_minus_one)]
#![warn(clippy::range_plus_one)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::verbose_bit_mask)]
// Correctness/Safety
#![deny(clippy::cfg_not_test)]
#![deny(clippy::debug_assert_with_mut_call)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::large_stack_arrays)]
#![warn(clippy::mixed_read_write_in_expression)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::unwrap_used)]
// Annoyances
#![allow(clippy::inline_always)]
#![allow(clippy::needless_range_loop)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::uninlined_format_args)]
#![allow(unsafe_op_in_unsafe_fn)]


pub mod block_reducer;
pub mod color;
pub mod frame;
pub mod params;
pub mod pixel_art;
pub mod reduce;
pub mod util;

pub use block_reducer::BlockReducer;
pub use frame::ImageFrame;
pub use params::BlockColorStrategy;
pub use pixel_art::ReducedPixelArt;
pub use reduce::reduce;
