use std::process::Command;

fn git_revision() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string())
}

fn main() {
    let rev = git_revision().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=RLNC_GIT_REV={rev}");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
