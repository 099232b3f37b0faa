//! Command: print version information.

/// Version string: `DOTLINK_VERSION` from the build, else the crate version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("DOTLINK_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the dotlink version to stdout.
#[allow(clippy::print_stdout)]
pub fn run() {
    println!("dotlink {}", version());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
