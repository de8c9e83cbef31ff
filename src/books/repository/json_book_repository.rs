use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use serde_json::Value;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{LibraryError, LibraryResult};

#[derive(Debug)]
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn ensure_parent(&self) -> LibraryResult<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

// Serializes the entities directly rather than through Value so fields keep declaration order.
pub fn encode_books(books: &[BookEntity]) -> LibraryResult<String> {
    let mut buf = serde_json::to_string_pretty(books)?;
    buf.push('\n');
    Ok(buf)
}

// Isbns are trimmed on decode; a mirror holding the same isbn twice is rejected as a whole.
pub fn decode_books(contents: &str) -> LibraryResult<Vec<BookEntity>> {
    let values: Vec<Value> = serde_json::from_str(contents)?;
    let books = values.into_iter()
        .map(BookEntity::from_representation)
        .collect::<LibraryResult<Vec<BookEntity>>>()?;
    let mut seen = HashSet::new();
    if let Some(dup) = books.iter().find(|b| !seen.insert(b.isbn.clone())) {
        return Err(LibraryError::serialization(
            format!("duplicate isbn {} in catalog", dup.isbn).as_str()));
    }
    Ok(books)
}

impl BookRepository for JsonBookRepository {
    fn location(&self) -> &Path {
        self.path.as_path()
    }

    fn load(&self) -> LibraryResult<Option<Vec<BookEntity>>> {
        self.ensure_parent()?;
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(LibraryError::from(err)),
        };
        decode_books(contents.as_str()).map(Some)
    }

    fn save(&self, books: &[BookEntity]) -> LibraryResult<usize> {
        let buf = encode_books(books)?;
        self.ensure_parent()?;
        let tmp_path = self.temp_path();
        fs::write(&tmp_path, buf)?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(LibraryError::from(err));
        }
        Ok(books.len())
    }
}
