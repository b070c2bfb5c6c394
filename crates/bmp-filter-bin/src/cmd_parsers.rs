use std::ffi::OsString;

use bmp_filter_core::FilterMode;
use clap::ArgMatches;

pub mod global_options;

/// Count the operands the legacy tool would have seen
///
/// `-g` counts as one, as does every positional value.
/// Logging and advanced flags are not operands.
pub fn count_operands(options: &ArgMatches) -> usize {
    let grayscale = usize::from(options.get_flag("grayscale"));
    let positional = options
        .get_many::<OsString>("operand")
        .map(|x| x.len())
        .unwrap_or(0);

    grayscale + positional
}

pub fn get_filter_mode(options: &ArgMatches) -> FilterMode {
    if options.get_flag("grayscale") {
        FilterMode::Grayscale
    } else {
        FilterMode::Threshold
    }
}
