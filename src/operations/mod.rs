pub mod greyscale;

use crate::{arg_parsers::Approach, error::MagickError, image::Image};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    Greyscale(Approach),
}

impl Operation {
    pub fn execute(&self, image: &mut Image) -> Result<(), MagickError> {
        match self {
            Operation::Greyscale(approach) => greyscale::greyscale(image, *approach),
        }
    }
}
