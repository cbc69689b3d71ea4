use std::fs;
use std::path::Path;

fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = std::process::Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .output()
        .unwrap_or_else(|err| panic!("git {} failed to start: {}", args.join(" "), err));
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Create a repository on `main` with one commit containing `files` plus a README.
pub(crate) fn init_fixture_repo(repo_dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(repo_dir).expect("create fixture dir");
    git(repo_dir, &["init", "--initial-branch=main"]);
    configure_user(repo_dir);

    fs::write(repo_dir.join("README.md"), "# NVR dashboard fixture\n").expect("write README");
    for (relative, content) in files {
        let path = repo_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture subdir");
        }
        fs::write(path, content).expect("write fixture file");
    }
    commit_all(repo_dir, "Initial commit");
}

pub(crate) fn configure_user(repo_dir: &Path) {
    git(repo_dir, &["config", "user.email", "test@example.com"]);
    git(repo_dir, &["config", "user.name", "Test User"]);
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) -> String {
    git(repo_dir, &["add", "."]);
    git(repo_dir, &["commit", "-m", message]);
    head_sha(repo_dir)
}

pub(crate) fn head_sha(repo_dir: &Path) -> String {
    git(repo_dir, &["rev-parse", "HEAD"])
}
