use std::ffi::{OsStr, OsString};

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::arg_parsers::Approach;

pub fn maybe_print_help_and_exit(bin_name: &str) {
    let args: Vec<_> = std::env::args_os().skip(1).collect();
    if wants_help(&args) {
        print_help_and_exit(bin_name)
    }
}

/// A help flag anywhere on the command line wins over everything else
fn wants_help(args: &[OsString]) -> bool {
    args.is_empty() || args.iter().any(|arg| is_help_flag(arg))
}

fn is_help_flag(arg: &OsStr) -> bool {
    ["-h", "--help", "-help"]
        .iter()
        .any(|flag| arg == OsStr::new(flag))
}

fn print_help_and_exit(bin_name: &str) -> ! {
    print!("{}", help_text(bin_name));
    std::process::exit(0);
}

pub fn help_text(bin_name: &str) -> String {
    let mut text = String::new();
    text.push_str(&format!("Version: {}\n", version_string()));
    text.push_str(&format!("License: {}\n", env!("CARGO_PKG_LICENSE")));
    text.push_str(&format!("Usage: {bin_name} <image_file> <approach>\n"));
    text.push_str(&format!("       {bin_name} -h | --help\n"));
    text.push('\n');
    text.push_str("Writes the greyscale image next to the input, named after the approach.\n");
    text.push('\n');
    text.push_str("Approaches:\n");
    for approach in Approach::VARIANTS {
        let names = format!("{}, {}", approach.name(), approach.short_name());
        text.push_str(&format!(
            "  {names:19} {} (suffix `{}`)\n",
            approach.help_text(),
            approach.file_suffix()
        ));
    }
    text
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("greymagick {version} {cpu}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_flags() {
        assert!(is_help_flag(OsStr::new("-h")));
        assert!(is_help_flag(OsStr::new("--help")));
        assert!(!is_help_flag(OsStr::new("photo.png")));
    }

    #[test]
    fn test_help_anywhere_on_the_command_line() {
        let args = |list: &[&str]| list.iter().map(OsString::from).collect::<Vec<_>>();
        assert!(wants_help(&args(&[])));
        assert!(wants_help(&args(&["-h"])));
        assert!(wants_help(&args(&["photo.png", "-h"])));
        assert!(wants_help(&args(&["photo.png", "bogus", "--help"])));
        assert!(!wants_help(&args(&["photo.png", "linear"])));
    }

    #[test]
    fn test_help_lists_every_approach() {
        let text = help_text("greymagick");
        assert!(text.contains("Usage: greymagick <image_file> <approach>"));
        assert!(text.contains("linear, l"));
        assert!(text.contains("linear_approx, la"));
        assert!(text.contains("gamma_decomp, gd"));
        assert!(text.contains("_gammaDecompressed"));
    }
}
