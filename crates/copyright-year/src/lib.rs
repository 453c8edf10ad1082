//! Current year and copyright notice formatting.
//!
//! The formatter is pure: it takes the year as an argument. [`current_year`]
//! reads it from the system clock, and the [`Year`] and [`Copyright`] wrappers
//! put the result into a markup [`Element`].

mod clock;
mod format;
mod markup;
mod options;

pub use crate::clock::current_year;
pub use crate::format::{format_copyright, format_year, format_year_range};
pub use crate::markup::{
    Copyright, Element, InvalidStyleError, Style, Tag, UnknownTagError, Year,
};
pub use crate::options::FormatOptions;
