use std::{ffi::OsString, path::Path, process::Command};

const DEMO_EXE_PATH: &str = env!("CARGO_BIN_EXE_carousel-demo");
const GALLERY_EXE_PATH: &str = env!("CARGO_BIN_EXE_carousel-gallery");
const DEFAULT_CFG: [&str; 2] = ["-C", "./tests/valid_configs/empty_config.toml"];

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

fn command(exe: &str, args: &[&str]) -> Command {
    let mut cmd = Command::new(exe);
    cmd.env("NO_COLOR", "1");

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" {
            // This is the config file; make sure we set it to absolute path!
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Returns the [`Command`] of a binary invocation of the playground demo.
pub fn demo_command(args: &[&str]) -> Command {
    command(DEMO_EXE_PATH, args)
}

/// Returns the [`Command`] of a binary invocation of the gallery demo.
pub fn gallery_command(args: &[&str]) -> Command {
    command(GALLERY_EXE_PATH, args)
}

/// Returns the [`Command`] of a binary invocation of the playground demo,
/// with the default, empty config file.
pub fn no_cfg_demo_command() -> Command {
    demo_command(&DEFAULT_CFG)
}
