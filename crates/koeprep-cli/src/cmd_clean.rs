use std::path::PathBuf;

use anyhow::{bail, Context};

pub fn execute(files: &[PathBuf], keep_going: bool) -> anyhow::Result<()> {
    let mut failed = 0usize;
    for file in files {
        let result = koeprep_clean::preprocess_file(file)
            .with_context(|| format!("failed to clean {}", file.display()));
        match result {
            Ok(destination) => println!("{} -> {}", file.display(), destination.display()),
            Err(err) if keep_going => {
                eprintln!("{err:#}");
                failed += 1;
            }
            Err(err) => return Err(err),
        }
    }
    if failed > 0 {
        bail!("{failed} of {} files failed", files.len());
    }
    Ok(())
}
