use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let fallback = std::env::var("CARGO_PKG_VERSION").unwrap_or_default();

    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output();

    let version = match output {
        Ok(o) if o.status.success() => {
            let described = String::from_utf8(o.stdout)
                .unwrap_or_default()
                .trim()
                .to_string();

            // Tags look like "v1.0.0"; the binary reports "1.0.0"
            let described = described.strip_prefix('v').unwrap_or(&described);
            if described.is_empty() {
                fallback
            } else {
                described.to_string()
            }
        }
        _ => fallback,
    };

    println!("cargo:rustc-env=VERSPEC_VERSION={}", version);
}
