pub mod check;
pub mod generate;
pub mod primitives;
pub mod render;
pub mod template_loader;

#[cfg(test)]
mod primitives_tests;
#[cfg(test)]
mod template_loader_tests;
