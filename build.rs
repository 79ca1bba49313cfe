use chrono::Datelike;

fn main() {
    // Year shown in the footer copyright line
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());
    println!("cargo:rerun-if-changed=build.rs");
}
