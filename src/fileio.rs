use std::{
	fs::{read, read_to_string, OpenOptions},
	io::{ErrorKind, Write},
	path::Path,
};

use crate::error::fileio::*;

/// Replace whatever is at `path` with `text`.
///
/// The parent directory must already exist. A failed write may leave the
/// file truncated.
pub fn write_artifact(path: impl AsRef<Path>, text: &str) -> FileIOResult {
	let path = path.as_ref();
	let mut file = OpenOptions::new()
		.write(true)
		.create(true)
		.truncate(true)
		.open(path)
		.map_err(|e| FileIOError::write(path, e))?;
	file.write_all(text.as_bytes()).map_err(|e| FileIOError::write(path, e))?;
	Ok(())
}

pub fn read_source(path: impl AsRef<Path>) -> FileIOResult<String> {
	let path = path.as_ref();
	read_to_string(path).map_err(|e| FileIOError::read(path, e))
}

/// Whether the artifact at `path` is byte for byte `text`. A missing or
/// non-UTF-8 file is stale.
pub fn is_up_to_date(path: impl AsRef<Path>, text: &str) -> FileIOResult<bool> {
	let path = path.as_ref();
	match read(path) {
		Ok(existing) => Ok(existing == text.as_bytes()),
		Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
		Err(e) => Err(FileIOError::read(path, e)),
	}
}
