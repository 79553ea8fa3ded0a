use anyhow::{Context, Result, bail};

/// Create a [`std::process::Command`] that does not open a console window on Windows.
pub fn command(program: &str) -> std::process::Command {
    #![allow(unused_mut)]
    let mut cmd = std::process::Command::new(program);
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
    cmd
}

/// Platform command that hands `url` to the default browser.
fn opener_command(url: &str) -> std::process::Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = command("open");
        cmd.arg(url);
        cmd
    }
    #[cfg(windows)]
    {
        let mut cmd = command("cmd");
        cmd.args(["/c", "start", "", url]);
        cmd
    }
    #[cfg(not(any(target_os = "macos", windows)))]
    {
        let mut cmd = command("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Open a URL in the default browser. Spawns and returns without waiting.
pub fn open_url(url: &str) -> Result<()> {
    opener_command(url)
        .spawn()
        .with_context(|| format!("Failed to launch browser for {}", url))?;
    Ok(())
}

/// Run `cmd` to completion, failing with its stderr when it exits non-zero.
pub fn run_checked(cmd: &mut std::process::Command) -> Result<std::process::Output> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let output = cmd
        .output()
        .with_context(|| format!("Failed to run {}", program))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            bail!("{} exited with {}", program, output.status);
        }
        bail!("{} failed: {}", program, stderr);
    }
    Ok(output)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn run_checked_reports_stderr() {
        let mut cmd = command("sh");
        cmd.args(["-c", "echo boom >&2; exit 3"]);
        let err = run_checked(&mut cmd).unwrap_err();
        assert!(err.to_string().contains("boom"), "{}", err);
    }

    #[test]
    fn run_checked_returns_stdout() {
        let mut cmd = command("sh");
        cmd.args(["-c", "printf ok"]);
        let output = run_checked(&mut cmd).unwrap();
        assert_eq!(output.stdout, b"ok");
    }
}
