//! CLI tests for `maze-runner check` and `maze-runner render`.

use std::process::Command;

use maze_runner::exit_codes;
use maze_runner::test_support::{MAZE_4X3, TestMaze};

fn run(maze: &TestMaze, command: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_maze-runner"))
        .current_dir(maze.root())
        .args([command, "maze.txt"])
        .output()
        .expect("run maze-runner")
}

#[test]
fn check_prints_the_maze_dimensions() {
    let maze = TestMaze::new(MAZE_4X3).expect("fixture");
    let output = run(&maze, "check");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "4x3\n");
}

#[test]
fn check_rejects_a_broken_border() {
    let maze = TestMaze::new("#####\n#...#\n#.###").expect("fixture");
    let output = run(&maze, "check");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
}

#[test]
fn render_reprints_the_parsed_maze() {
    let maze = TestMaze::new(MAZE_4X3).expect("fixture");
    let output = run(&maze, "render");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        format!("{MAZE_4X3}\n")
    );
}
