use std::path::Path;

use text_io::read;

pub enum Assume {
    Yes,
    No,
}

/// Ask whether an existing file should be acted on, unless the answer was
/// already fixed on the command line.
pub fn exists_decision<P: AsRef<Path>>(
    place: &str,
    action: &str,
    path: &P,
    assume: Option<Assume>,
) -> bool {
    match assume {
        Some(Assume::Yes) => return true,
        Some(Assume::No) => return false,
        None => (),
    }

    let path = path.as_ref();
    loop {
        print!("{place} file {path:?} already exists. {action}? [y/N] ");

        let answer: String = read!("{}\n");
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => return true,
            "" | "n" | "no" => return false,
            _ => continue,
        }
    }
}
