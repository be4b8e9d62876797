fn main() {
    // Stamped into the contact footer through env!("BUILD_TIME")
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/projects.json");
    println!("cargo:rerun-if-changed=blog");
}
