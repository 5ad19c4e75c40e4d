//! Command-line parsing.
//!
//! The interface is just two positionals, `<image_file> <approach>`,
//! so there is no need for an argument parsing library.

use std::{ffi::OsString, path::PathBuf};

use crate::{arg_parsers::Approach, error::MagickError, plan::ExecutionPlan, wm_err};

pub fn parse_args(args: Vec<OsString>) -> Result<ExecutionPlan, MagickError> {
    let mut positionals = args.into_iter().skip(1); // skip argv[0], path to our binary
    let (Some(image_file), Some(approach), None) = (
        positionals.next(),
        positionals.next(),
        positionals.next(),
    ) else {
        return Err(wm_err!("expected exactly two arguments: <image_file> <approach>"));
    };

    // the approach is validated before anything touches the filesystem
    let approach = Approach::try_from(approach.as_os_str())
        .map_err(|arg_err| wm_err!("{}", arg_err.display_with_arg("approach", &approach)))?;

    Ok(ExecutionPlan::greyscale(PathBuf::from(image_file), approach))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::Operation;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("greymagick")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    #[test]
    fn test_valid_invocation() {
        let plan = parse_args(args(&["pics/cat.png", "la"])).unwrap();
        assert_eq!(plan.input_file, PathBuf::from("pics/cat.png"));
        assert_eq!(plan.output_file, PathBuf::from("pics/cat_linearApprox.png"));
        assert_eq!(plan.ops, vec![Operation::Greyscale(Approach::LinearApprox)]);
    }

    #[test]
    fn test_unknown_approach() {
        let err = parse_args(args(&["cat.png", "bogus"])).unwrap_err();
        assert!(err
            .0
            .contains("invalid argument for option `approach': unknown greyscale approach"));
    }

    #[test]
    fn test_wrong_argument_count() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["cat.png"])).is_err());
        assert!(parse_args(args(&["cat.png", "linear", "extra"])).is_err());
    }
}
