//! Build script for rigel-phase.
//!
//! Emits link search paths for the vendor vector math library selected by cargo
//! features. The libraries themselves are linked from `#[link]` attributes in the
//! backend modules; this script only tells the linker where to look.

use std::env;
use std::path::PathBuf;

/// Vendor library locations, keyed by the cargo feature that enables them
const VENDORS: &[(&str, &str, &[&str])] = &[
    ("CARGO_FEATURE_MKL", "MKLROOT", &["lib/intel64", "lib"]),
    ("CARGO_FEATURE_ACML", "ACML_DIR", &["lib", ""]),
    ("CARGO_FEATURE_MASSV", "MASSV_DIR", &["lib64", "lib", ""]),
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    for &(feature, root_var, subdirs) in VENDORS {
        println!("cargo:rerun-if-env-changed={}", root_var);

        if env::var_os(feature).is_none() {
            continue;
        }

        let Some(root) = env::var_os(root_var).map(PathBuf::from) else {
            println!(
                "cargo:warning={} not set; relying on the default linker search path",
                root_var
            );
            continue;
        };

        for subdir in subdirs {
            let dir = root.join(subdir);
            if dir.is_dir() {
                println!("cargo:rustc-link-search=native={}", dir.display());
                break;
            }
        }
    }
}
