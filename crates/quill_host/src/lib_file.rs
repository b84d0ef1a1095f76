//! Default library file selection.

use std::path::{Path, PathBuf};

/// Returns the default library file for `target` inside `lib_dir`.
///
/// `es3`, `es5` and a missing or unrecognized target use `lib.d.ts`;
/// `es6`/`es2015` use `lib.es6.d.ts`; later years and `esnext` use the
/// matching `.full.d.ts` bundle.
pub fn default_lib_file_name(lib_dir: &Path, target: Option<&str>) -> PathBuf {
    lib_dir.join(lib_file_for_target(target))
}

fn lib_file_for_target(target: Option<&str>) -> String {
    let target = target.map(str::to_ascii_lowercase).unwrap_or_default();
    match target.as_str() {
        "es6" | "es2015" => "lib.es6.d.ts".to_string(),
        "esnext" => "lib.esnext.full.d.ts".to_string(),
        t if is_yearly_target(t) => format!("lib.{t}.full.d.ts"),
        _ => "lib.d.ts".to_string(),
    }
}

fn is_yearly_target(target: &str) -> bool {
    target
        .strip_prefix("es")
        .and_then(|year| year.parse::<u16>().ok())
        .is_some_and(|year| year >= 2016)
}
