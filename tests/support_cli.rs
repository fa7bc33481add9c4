use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

pub const RESULTS: &str = "\
Size,Container,CreateDestroyMean,CreateDestroyCI95,IterateMean,IterateCI95,AccessMean,AccessCI95
1,static_vector,0.000120,0.000010,0.000050,0.000004,0.000030,0.000002
1,vector<unique_ptr>,0.000410,0.000030,0.000090,0.000008,0.000070,0.000004
100,static_vector,0.003100,0.000150,0.001100,0.000060,0.000800,0.000030
100,vector<unique_ptr>,0.068000,0.003000,0.002500,0.000090,0.001900,0.000050
10000,static_vector,0.310000,0.015000,0.110000,0.006000,0.080000,0.003000
10000,vector<unique_ptr>,6.800000,0.300000,0.250000,0.009000,0.190000,0.005000
";

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Run the compiled binary inside `workdir`.
///
/// # Errors
///
/// Returns an error when the binary path is unknown or the process cannot start.
pub fn run_benchplot<I, S>(workdir: &Path, args: I) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_benchplot_with_env(workdir, args, &[("NO_COLOR", "1")])
}

/// Run the compiled binary inside `workdir` with extra environment variables.
///
/// # Errors
///
/// Returns an error when the binary path is unknown or the process cannot start.
pub fn run_benchplot_with_env<I, S>(
    workdir: &Path,
    args: I,
    env: &[(&str, &str)],
) -> Result<Output, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = benchplot_bin()?;
    let mut command = Command::new(bin);
    command
        .args(args)
        .current_dir(workdir)
        .env("RUST_LOG", "error")
        .env_remove("BENCHPLOT_LOG");
    for (key, value) in env {
        command.env(key, value);
    }
    command
        .output()
        .map_err(|err| format!("run benchplot failed: {}", err))
}

/// Check that `path` holds a PNG image.
///
/// # Errors
///
/// Returns an error when the file is missing or lacks the PNG signature.
pub fn expect_png(path: &Path) -> Result<(), String> {
    let bytes =
        std::fs::read(path).map_err(|err| format!("read {} failed: {}", path.display(), err))?;
    if !bytes.starts_with(&PNG_SIGNATURE) {
        return Err(format!("{} is not a PNG image", path.display()));
    }
    Ok(())
}

/// Width and height from the PNG header.
///
/// # Errors
///
/// Returns an error when the file is missing or too short to hold a header.
pub fn png_size(path: &Path) -> Result<(u32, u32), String> {
    expect_png(path)?;
    let bytes =
        std::fs::read(path).map_err(|err| format!("read {} failed: {}", path.display(), err))?;
    let field = |range: std::ops::Range<usize>| -> Result<u32, String> {
        let slice = bytes
            .get(range)
            .ok_or_else(|| format!("{} has a truncated header", path.display()))?;
        let raw: [u8; 4] = slice
            .try_into()
            .map_err(|_err| format!("{} has a malformed header", path.display()))?;
        Ok(u32::from_be_bytes(raw))
    };
    Ok((field(16..20)?, field(20..24)?))
}

#[must_use]
pub fn describe(output: &Output) -> String {
    format!(
        "status: {}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

fn benchplot_bin() -> Result<String, String> {
    option_env!("CARGO_BIN_EXE_benchplot").map_or_else(
        || Err("CARGO_BIN_EXE_benchplot missing at compile time.".to_owned()),
        |path| Ok(path.to_owned()),
    )
}
