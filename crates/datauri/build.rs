fn main() {
    println!("cargo:rerun-if-env-changed=TARGET");
    println!("cargo:rerun-if-env-changed=PROFILE");
    let forwarded = [
        ("TARGET", "DATAURI_BUILD_TARGET"),
        ("PROFILE", "DATAURI_BUILD_PROFILE"),
    ];
    for (from, to) in forwarded {
        if let Ok(value) = std::env::var(from) {
            println!("cargo:rustc-env={to}={value}");
        }
    }
}
