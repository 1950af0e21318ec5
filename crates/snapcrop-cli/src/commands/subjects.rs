use anyhow::Result;
use snapcrop_core::subject::Subject;

pub fn run() -> Result<()> {
    for subject in Subject::ALL {
        println!("{subject}");
    }
    Ok(())
}
