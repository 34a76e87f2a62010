use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::{Command, Stdio};

/// Execute a command in the given directory, passing its output through
/// to the terminal. stderr is additionally captured so a failing command
/// can surface it in the error message.
pub fn execute_in(ctx: &Context, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
    if ctx.verbose {
        println!("Executing: {} {}", program, args.join(" "));
    }

    let mut child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(stdout) = child.stdout.take() {
        let reader = BufReader::new(stdout);
        for line in reader.lines().map_while(|l| l.ok()) {
            println!("{}", line);
        }
    }

    let mut stderr_text = String::new();
    if let Some(stderr) = child.stderr.take() {
        let reader = BufReader::new(stderr);
        for line in reader.lines().map_while(|l| l.ok()) {
            eprintln!("{}", line);
            stderr_text.push_str(&line);
            stderr_text.push('\n');
        }
    }

    let status = child.wait()?;

    if !status.success() {
        let mut message = format!(
            "{} {} failed with exit code: {}",
            program,
            args.join(" "),
            status.code().unwrap_or(-1)
        );
        let stderr_text = stderr_text.trim();
        if !stderr_text.is_empty() {
            message.push('\n');
            message.push_str(stderr_text);
        }
        return Err(Error::CommandFailed(message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_ctx() -> Context {
        Context::new(PathBuf::from("."), None, None, false)
    }

    #[test]
    fn test_successful_command() {
        let ctx = test_ctx();
        execute_in(&ctx, Path::new("."), "true", &[]).unwrap();
    }

    #[test]
    fn test_failing_command_reports_exit_code() {
        let ctx = test_ctx();
        let err = execute_in(&ctx, Path::new("."), "false", &[]).unwrap_err();
        assert!(matches!(err, Error::CommandFailed(_)));
        assert!(err.to_string().contains("exit code: 1"));
    }

    #[test]
    fn test_failing_command_surfaces_stderr() {
        let ctx = test_ctx();
        let err = execute_in(&ctx, Path::new("."), "sh", &["-c", "echo boom >&2; exit 2"])
            .unwrap_err();
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let ctx = test_ctx();
        let err = execute_in(&ctx, Path::new("."), "definitely-not-a-real-binary", &[])
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
