use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn solve_writes_gif_to_stdout() {
    let mut cmd = Command::cargo_bin("pathfind").unwrap();
    cmd.args(["solve", "--output", "-"])
        .write_stdin("```\nS...\nX.\n```\n");

    let output = cmd.assert().success().get_output().stdout.clone();
    assert!(output.starts_with(b"GIF89a"));
}

#[test]
fn solve_prints_solution_and_json() {
    let dir = std::env::temp_dir().join(format!("pathfind-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let gif_path = dir.join("path.gif");

    let mut cmd = Command::cargo_bin("pathfind").unwrap();
    cmd.arg("solve")
        .arg("--output")
        .arg(&gif_path)
        .arg("--print-solution")
        .arg("--json")
        .write_stdin("S.B\n..X");

    cmd.assert()
        .success()
        .stderr(str::contains("**B\n..*\n"))
        .stdout(str::contains("\"reached_goal\":true"));
    assert!(std::fs::read(&gif_path).unwrap().starts_with(b"GIF89a"));
}

#[test]
fn solve_reports_missing_markers() {
    let mut cmd = Command::cargo_bin("pathfind").unwrap();
    cmd.args(["solve", "--output", "-"]).write_stdin("S....");

    cmd.assert()
        .failure()
        .stderr(str::contains("Board must contain a start (S) and end (X) tile!"));
}

#[test]
fn solve_ignores_trailing_spaces_in_rows() {
    let mut cmd = Command::cargo_bin("pathfind").unwrap();
    cmd.args(["solve", "--output", "-", "--print-solution"])
        .write_stdin("S.. \n..X  \n");

    cmd.assert().success().stderr(str::contains("**.\n..*\n"));
}

#[test]
fn generate_is_reproducible() {
    let run = || {
        let mut cmd = Command::cargo_bin("pathfind").unwrap();
        cmd.args(["generate", "--width", "10", "--height", "4", "--seed", "3"]);
        cmd.assert().success().get_output().stdout.clone()
    };
    let first = run();
    assert_eq!(first, run());

    let text = String::from_utf8(first).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert_eq!(text.matches('S').count(), 1);
    assert_eq!(text.matches('X').count(), 1);
}
