use std::path::{Path, PathBuf};
use std::{fs, io};

pub fn collect_json_files_from_dir(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut result: Vec<PathBuf> = vec![];
    if dir.is_dir() {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                result.extend(collect_json_files_from_dir(&path)?);
            } else if path.extension().map(|e| e == "json").unwrap_or(false) {
                result.push(path);
            }
        }
    }
    Ok(result)
}

#[macro_export]
macro_rules! log_map_err {
    ($error:expr, $message:expr) => {
|e| {
    log::error!("{}", format!("{} - {:}", $message, &e).as_str());
    return $error;
}
    };
}
