use std::process::Command;

fn main() {
    let commit = run(&["git", "rev-parse", "--short", "HEAD"]);
    let build_date = run(&["date", "-u", "+%Y-%m-%d"]);
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=DUSTARCHIVE_GIT_COMMIT={commit}");
    println!("cargo:rustc-env=DUSTARCHIVE_BUILD_DATE={build_date}");
    println!("cargo:rustc-env=DUSTARCHIVE_BUILD_TARGET={target}");

    // 仅在 git HEAD 变化时重新运行
    println!("cargo:rerun-if-changed=.git/HEAD");
}

/// 执行外部命令并取其标准输出，失败时返回 "unknown"
fn run(cmd: &[&str]) -> String {
    Command::new(cmd[0])
        .args(&cmd[1..])
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
