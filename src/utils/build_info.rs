//! Compile-time build information for `--version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// "scenario-quiz <date> (<commit>)"
pub fn version_line() -> String {
    format!("scenario-quiz {} ({})", BUILD_DATE, BUILD_COMMIT)
}
