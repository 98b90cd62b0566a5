use std::process::Command;

fn main() {
  // Embed git metadata so `--version` can identify the exact build.
  // Falls back to "unknown" outside a git checkout.
  println!("cargo:rustc-env=GIT_HASH={}", git_output(&["rev-parse", "--short", "HEAD"]));
  println!("cargo:rustc-env=GIT_DATE={}", git_output(&["log", "-1", "--format=%cs"]));

  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}

fn git_output(args: &[&str]) -> String {
  Command::new("git")
    .args(args)
    .output()
    .ok()
    .filter(|output| output.status.success())
    .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
    .filter(|value| !value.is_empty())
    .unwrap_or_else(|| "unknown".to_string())
}
