use std::path::Path;

use anyhow::Result;
use console::style;

#[allow(unused)]
pub const SEPARATOR: &str = "================\n";
pub const TEST_DIR: &str = "tests";
pub const EXTENSION: &str = "board";

/// Runs `f` over every `*.board` fixture in `tests/<subdir>`, sorted by name.
///
/// With `golden` set, `f`'s output must reproduce the fixture byte-for-byte
/// (run with `UPDATE_EXPECT=1` to rewrite fixtures); otherwise any `Ok` is a
/// pass and the output is ignored.
pub fn run_tests(subdir: &str, golden: bool, mut f: impl FnMut(&str) -> Result<String>) {
    let mut tests = std::fs::read_dir(Path::new(TEST_DIR).join(subdir))
        .unwrap()
        .filter_map(|ent| {
            let path = ent.unwrap().path();
            if path.extension().map_or(true, |ext| ext != EXTENSION) {
                return None;
            }
            let name = path.file_stem().unwrap().to_str().unwrap().to_owned();
            Some((name, path))
        })
        .collect::<Vec<_>>();
    tests.sort();

    let do_update_tests = std::env::var("UPDATE_EXPECT").map_or(false, |v| v == "1");

    let mut failed_cnt = 0;
    for (name, path) in &tests {
        eprint!("{name}: ");
        let content = std::fs::read_to_string(path).unwrap();
        match f(&content) {
            Ok(got) if !golden || got == content => eprintln!("{}", style("OK").green()),
            Ok(got) if do_update_tests => {
                std::fs::write(path, got).unwrap();
                eprintln!("{}", style("Updated").yellow());
            }
            Ok(_) => {
                eprintln!("{}", style("FAILED").red());
                failed_cnt += 1;
            }
            Err(err) => {
                eprintln!("{}\n{:?}", style("FAILED").red(), err);
                failed_cnt += 1;
            }
        }
    }

    if failed_cnt != 0 {
        eprintln!("{failed_cnt}/{} tests failed", tests.len());
        std::process::exit(1);
    }
}
