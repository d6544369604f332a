// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager and ICU need.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Registry lookups (RegOpenKeyExW, RegQueryInfoKeyW) used by the font manager
        println!("cargo:rustc-link-lib=advapi32");
    }
}
