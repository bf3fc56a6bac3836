fn main() {
    // Prefer env vars (set by CI builds) over invoking the tools directly
    println!(
        "cargo:rustc-env=GIT_SHA={}",
        stamp("GIT_SHA", "git", &["rev-parse", "--short", "HEAD"])
    );
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        stamp("BUILD_DATE", "date", &["+%Y-%m-%d"])
    );
}

fn stamp(var: &str, cmd: &str, args: &[&str]) -> String {
    std::env::var(var).unwrap_or_else(|_| {
        std::process::Command::new(cmd)
            .args(args)
            .output()
            .map(|output| String::from_utf8_lossy(&output.stdout).trim().to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    })
}
