use std::{
    env, fs,
    io::Result,
    path::{Path, PathBuf},
};

use clap::{Command, CommandFactory};
use clap_complete::{generate_to, shells::Shell, Generator};
use clap_complete_fig::Fig;
use clap_complete_nushell::Nushell;

#[path = "src/options/args.rs"]
mod args;

const BIN_NAME: &str = "tbl";

fn create_dir(dir: &Path) -> Result<()> {
    let res = fs::create_dir_all(dir);
    match &res {
        Ok(()) => {}
        Err(err) => {
            eprintln!(
                "Failed to create a directory at location {dir:?}, encountered error {err:?}. Aborting...",
            );
        }
    }

    res
}

fn generate_completions<G>(to_generate: G, cmd: &mut Command, out_dir: &Path) -> Result<PathBuf>
where
    G: Generator,
{
    generate_to(to_generate, cmd, BIN_NAME, out_dir)
}

fn main() -> Result<()> {
    const COMPLETION_DIR: &str = "./target/tmp/tabelle/completion/";
    const MANPAGE_DIR: &str = "./target/tmp/tabelle/manpage/";

    match env::var_os("TBL_GENERATE") {
        Some(var) if !var.is_empty() => {
            let completion_out_dir = PathBuf::from(COMPLETION_DIR);
            let manpage_out_dir = PathBuf::from(MANPAGE_DIR);

            create_dir(&completion_out_dir)?;
            create_dir(&manpage_out_dir)?;

            // Generate completions
            let mut app = args::TabelleArgs::command();
            generate_completions(Shell::Bash, &mut app, &completion_out_dir)?;
            generate_completions(Shell::Zsh, &mut app, &completion_out_dir)?;
            generate_completions(Shell::Fish, &mut app, &completion_out_dir)?;
            generate_completions(Shell::PowerShell, &mut app, &completion_out_dir)?;
            generate_completions(Shell::Elvish, &mut app, &completion_out_dir)?;
            generate_completions(Fig, &mut app, &completion_out_dir)?;
            generate_completions(Nushell, &mut app, &completion_out_dir)?;

            // Generate manpage
            let app = app.name(BIN_NAME);
            let man = clap_mangen::Man::new(app);
            let mut buffer: Vec<u8> = Default::default();
            man.render(&mut buffer)?;
            fs::write(manpage_out_dir.join("tbl.1"), buffer)?;
        }
        _ => {}
    }

    println!("cargo:rerun-if-env-changed=TBL_GENERATE");
    println!("cargo:rerun-if-changed=src/options/args.rs");

    Ok(())
}
