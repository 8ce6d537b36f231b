//! Formatting helpers for identifiers and asset paths.

pub fn vis_label(id: &str) -> String {
    format!("vis {id}")
}

/// Join a relative directory and a file name with exactly one slash.
pub fn join_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let file = file.trim_start_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
