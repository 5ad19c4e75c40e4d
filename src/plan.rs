use std::{ffi::OsStr, path::PathBuf};

use image::ImageFormat;

use crate::arg_parsers::Approach;
use crate::decode::decode;
use crate::encode::encode;
use crate::error::MagickError;
use crate::operations::Operation;
use crate::utils::filename::insert_suffix_before_extension;

/// Plan of operations for a single run
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub input_file: PathBuf,
    /// `None` means guessing from the file contents
    pub input_format: Option<ImageFormat>,
    pub ops: Vec<Operation>,
    pub output_file: PathBuf,
}

impl ExecutionPlan {
    /// The output lands next to the input, named after the approach.
    pub fn greyscale(input_file: PathBuf, approach: Approach) -> Self {
        let output_file =
            insert_suffix_before_extension(&input_file, OsStr::new(approach.file_suffix()));
        Self {
            input_file,
            input_format: None,
            ops: vec![Operation::Greyscale(approach)],
            output_file,
        }
    }

    pub fn execute(&self) -> Result<(), MagickError> {
        crate::init::init();
        let mut image = decode(&self.input_file, self.input_format)?;

        for operation in &self.ops {
            operation.execute(&mut image)?;
        }

        encode(&image, &self.output_file, None)?;
        log::info!(
            "converted {} to {}",
            self.input_file.display(),
            self.output_file.display()
        );
        Ok(())
    }
}
