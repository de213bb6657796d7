use std::error::Error;

use drawable::session::{Options, Session};

#[macro_export]
macro_rules! test {
    ($name: ident, $script: expr, $output: expr) => {
        #[test]
        fn $name() -> Result<(), Box<dyn std::error::Error>> {
            $crate::common::run_test($script, $output)
        }
    };
}

/// Runs `script` without rules between drawings and compares what was drawn,
/// ignoring the indentation of the expected text's own layout.
pub(crate) fn run_test(script: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let options = Options {
        rule_width: 0,
        ..Default::default()
    };
    let mut session = Session::new(vec![], options);
    session.run(script)?;
    let actual = String::from_utf8(session.into_inner())?;
    let expected = unindent(output);
    if expected != actual {
        eprintln!("{expected}\n{actual}");
    }
    assert_eq!(expected, actual);
    Ok(())
}

/// Strips the common leading whitespace and surrounding blank lines from
/// `text`, keeping the relative indentation.
fn unindent(text: &str) -> String {
    let lines: Vec<_> = text
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    let margin = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start().len())
        .min()
        .unwrap_or(0);
    let mut out = String::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        out.push_str(&line[margin..]);
        out.push('\n');
    }
    out
}
