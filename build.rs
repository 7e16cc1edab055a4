fn main() {
    // Re-run if git HEAD changes (new commits, checkouts, etc.)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs/");

    let hash = git(&["rev-parse", "--short", "HEAD"]).unwrap_or_default();
    let on_tag = git(&["describe", "--exact-match", "--tags", "HEAD"]).is_some();

    // Footer copyright year. SOURCE_DATE_EPOCH wins when set.
    let year = std::env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|epoch| command("date", &["-u", "-d", &format!("@{epoch}"), "+%Y"]))
        .or_else(|| command("date", &["-u", "+%Y"]))
        .unwrap_or_else(|| "2025".to_string());
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    println!("cargo:rustc-env=GIT_HASH={hash}");
    println!("cargo:rustc-env=ON_RELEASE_TAG={on_tag}");
    println!("cargo:rustc-env=BUILD_YEAR={year}");
}

fn git(args: &[&str]) -> Option<String> {
    command("git", args)
}

fn command(program: &str, args: &[&str]) -> Option<String> {
    std::process::Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
}
