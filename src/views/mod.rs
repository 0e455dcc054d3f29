//! The views module contains the screen-level components of the app. [`Customizer`] is the one
//! screen; [`Header`] and [`Footer`] frame it.

mod customizer;
pub use customizer::Customizer;

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;

#[cfg(test)]
mod tests;
